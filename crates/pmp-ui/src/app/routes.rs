//! Routing definitions for the partner-management console.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Root,
    #[at("/partnermanagement")]
    Home,
    #[at("/partnermanagement/authentication-services/api-keys")]
    ApiKeys,
    #[at("/partnermanagement/authentication-services/api-keys/generate")]
    GenerateApiKey,
    #[not_found]
    #[at("/404")]
    NotFound,
}
