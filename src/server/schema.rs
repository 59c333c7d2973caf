//! GraphQL schema for the contact directory.
//!
//! Every operation is a typed resolver on [`QueryRoot`] or [`MutationRoot`];
//! resolvers fetch the [`ContactService`] from the schema data and delegate.

use crate::models::{Address, Contact, NewContact, PhoneFilter};
use crate::services::ContactService;
use async_graphql::{
    Context, EmptySubscription, Enum, ErrorExtensions, Object, Result, Schema, SimpleObject, ID,
};
use std::sync::Arc;

/// The complete GraphQL schema
pub type DirectorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around the given service.
pub fn build_schema(service: Arc<dyn ContactService>) -> DirectorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

fn service<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn ContactService>> {
    ctx.data::<Arc<dyn ContactService>>()
}

/// Phone-presence argument of `allPersons`.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum YesNo {
    Yes,
    No,
}

impl From<Option<YesNo>> for PhoneFilter {
    fn from(value: Option<YesNo>) -> Self {
        match value {
            None => PhoneFilter::All,
            Some(YesNo::Yes) => PhoneFilter::HasPhone,
            Some(YesNo::No) => PhoneFilter::NoPhone,
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Address")]
pub struct AddressObject {
    street: String,
    city: String,
}

impl From<Address> for AddressObject {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
        }
    }
}

/// A contact as exposed on the wire.
pub struct Person(Contact);

#[Object]
impl Person {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn address(&self) -> AddressObject {
        self.0.address().into()
    }

    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of people in the directory.
    async fn person_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let count = service(ctx)?.count().await;
        Ok(i32::try_from(count)?)
    }

    /// Everyone, or only those with (`YES`) or without (`NO`) a phone.
    async fn all_persons(&self, ctx: &Context<'_>, phone: Option<YesNo>) -> Result<Vec<Person>> {
        let contacts = service(ctx)?.list(phone.into()).await;
        Ok(contacts.into_iter().map(Person).collect())
    }

    /// The person with exactly this name, if any.
    async fn find_person(&self, ctx: &Context<'_>, name: String) -> Result<Option<Person>> {
        Ok(service(ctx)?.find_by_name(&name).await.map(Person))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    // Nullable so a rejected insert still yields `addPerson: null` next to the error.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<Option<Person>> {
        let contact = service(ctx)?
            .add_contact(NewContact {
                name,
                phone,
                street,
                city,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(Person(contact)))
    }

    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> Result<Option<Person>> {
        Ok(service(ctx)?.edit_phone(&name, phone).await.map(Person))
    }
}
