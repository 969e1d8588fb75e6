//! One thin command per handler: build the request from flags, run it, print
//! the response envelope as JSON.

use sl_core::entities::NewContact;
use sl_handlers::address::AddressLookupRequest;
use sl_handlers::contact::ContactCreateRequest;
use sl_handlers::currency::CurrencyRequest;
use sl_handlers::details::OpportunityDetailsRequest;
use sl_handlers::renewal::RenewalValidationRequest;
use sl_handlers::stage::StageRequest;
use sl_handlers::Envelope;
use sl_sfdc::RestGateway;

use crate::cli::Commands;

pub async fn dispatch(gateway: &RestGateway, command: Commands) -> anyhow::Result<()> {
    let envelope = match command {
        // Serve is handled before authentication in main.
        Commands::Serve => anyhow::bail!("serve is not a dispatchable command"),
        Commands::Address(args) => {
            let request = AddressLookupRequest {
                opportunity_id: args.opportunity_id,
            };
            Envelope::from_result(&sl_handlers::address::run(gateway, &request).await)
        }
        Commands::Contact(args) => {
            let request = ContactCreateRequest {
                opportunity_id: args.opportunity_id,
                contact: NewContact {
                    first_name: args.first_name,
                    last_name: Some(args.last_name),
                    email: args.email,
                    phone: args.phone,
                    title: args.title,
                },
                role: args.role,
                primary: !args.no_primary,
            };
            Envelope::from_result(&sl_handlers::contact::run(gateway, &request).await)
        }
        Commands::Details(args) => {
            let request = OpportunityDetailsRequest {
                opportunity_id: args.opportunity_id,
            };
            Envelope::from_result(&sl_handlers::details::run(gateway, &request).await)
        }
        Commands::Stage(args) => {
            let request = StageRequest {
                opportunity_id: args.opportunity_id,
                stage: args.stage,
            };
            Envelope::from_result(&sl_handlers::stage::run(gateway, &request).await)
        }
        Commands::Currency(args) => {
            let request = CurrencyRequest {
                opportunity_id: args.opportunity_id,
            };
            Envelope::from_result(&sl_handlers::currency::run(gateway, &request).await)
        }
        Commands::Validate(args) => {
            let request = RenewalValidationRequest {
                opportunity_id: args.opportunity_id,
            };
            Envelope::from_result(&sl_handlers::renewal::run(gateway, &request).await)
        }
    };

    println!("{}", envelope.to_json()?);
    Ok(())
}
