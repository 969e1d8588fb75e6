use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer account with its billing and shipping address components,
/// as returned by a relationship query from an Opportunity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    #[serde(rename = "Id")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "BillingStreet")]
    pub billing_street: Option<String>,
    #[serde(rename = "BillingCity")]
    pub billing_city: Option<String>,
    #[serde(rename = "BillingState")]
    pub billing_state: Option<String>,
    #[serde(rename = "BillingPostalCode")]
    pub billing_postal_code: Option<String>,
    #[serde(rename = "BillingCountry")]
    pub billing_country: Option<String>,
    #[serde(rename = "ShippingStreet")]
    pub shipping_street: Option<String>,
    #[serde(rename = "ShippingCity")]
    pub shipping_city: Option<String>,
    #[serde(rename = "ShippingState")]
    pub shipping_state: Option<String>,
    #[serde(rename = "ShippingPostalCode")]
    pub shipping_postal_code: Option<String>,
    #[serde(rename = "ShippingCountry")]
    pub shipping_country: Option<String>,
}

impl Account {
    /// The billing address as a structured [`crate::address::Address`].
    #[must_use]
    pub fn billing_address(&self) -> crate::address::Address {
        crate::address::Address {
            street: self.billing_street.clone(),
            city: self.billing_city.clone(),
            state: self.billing_state.clone(),
            postal_code: self.billing_postal_code.clone(),
            country: self.billing_country.clone(),
        }
    }

    /// The shipping address as a structured [`crate::address::Address`].
    #[must_use]
    pub fn shipping_address(&self) -> crate::address::Address {
        crate::address::Address {
            street: self.shipping_street.clone(),
            city: self.shipping_city.clone(),
            state: self.shipping_state.clone(),
            postal_code: self.shipping_postal_code.clone(),
            country: self.shipping_country.clone(),
        }
    }
}
