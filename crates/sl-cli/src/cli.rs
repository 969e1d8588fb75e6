use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for the `sln` binary.
#[derive(Debug, Parser)]
#[command(name = "sln", version, about = "Salesline - Salesforce opportunity toolbox")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve all handlers over HTTP
    Serve,

    /// Look up the billing and shipping addresses of an opportunity's account
    Address(OpportunityArgs),

    /// Create a contact and link it to an opportunity
    Contact(ContactArgs),

    /// Aggregate contact roles and the NetSuite subscription link
    Details(OpportunityArgs),

    /// Read or update the opportunity's pipeline stage
    Stage(StageArgs),

    /// Read the opportunity's currency and amount
    Currency(OpportunityArgs),

    /// Run the renewal validation checklist
    Validate(OpportunityArgs),
}

#[derive(Debug, Args)]
pub struct OpportunityArgs {
    /// Opportunity record id
    #[arg(long)]
    pub opportunity_id: String,
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Opportunity record id
    #[arg(long)]
    pub opportunity_id: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Role label for the contact role, e.g. "Decision Maker"
    #[arg(long)]
    pub role: Option<String>,

    /// Create the role as non-primary
    #[arg(long)]
    pub no_primary: bool,
}

#[derive(Debug, Args)]
pub struct StageArgs {
    /// Opportunity record id
    #[arg(long)]
    pub opportunity_id: String,

    /// Target stage label; omit to read the current stage
    #[arg(long)]
    pub stage: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sln", "--verbose", "serve"]).expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve));
    }

    #[test]
    fn address_requires_opportunity_id() {
        assert!(Cli::try_parse_from(["sln", "address"]).is_err());

        let cli = Cli::try_parse_from(["sln", "address", "--opportunity-id", "006X"])
            .expect("cli should parse");
        let Commands::Address(args) = cli.command else {
            panic!("expected address command");
        };
        assert_eq!(args.opportunity_id, "006X");
    }

    #[test]
    fn contact_flags_parse() {
        let cli = Cli::try_parse_from([
            "sln",
            "contact",
            "--opportunity-id",
            "006X",
            "--last-name",
            "Rivera",
            "--role",
            "Decision Maker",
            "--no-primary",
        ])
        .expect("cli should parse");

        let Commands::Contact(args) = cli.command else {
            panic!("expected contact command");
        };
        assert_eq!(args.last_name, "Rivera");
        assert_eq!(args.role.as_deref(), Some("Decision Maker"));
        assert!(args.no_primary);
        assert!(args.email.is_none());
    }

    #[test]
    fn stage_label_is_optional() {
        let cli = Cli::try_parse_from(["sln", "stage", "--opportunity-id", "006X"])
            .expect("cli should parse");
        let Commands::Stage(args) = cli.command else {
            panic!("expected stage command");
        };
        assert!(args.stage.is_none());

        let cli = Cli::try_parse_from([
            "sln",
            "stage",
            "--opportunity-id",
            "006X",
            "--stage",
            "Closed Won",
        ])
        .expect("cli should parse");
        let Commands::Stage(args) = cli.command else {
            panic!("expected stage command");
        };
        assert_eq!(args.stage.as_deref(), Some("Closed Won"));
    }
}
