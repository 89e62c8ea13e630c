//! In-memory deal API - the only "external" collaborator the app talks to.
//! A real HTTP client would replace `MockDealApi` without touching the
//! controller or the screening service.

pub mod mock_deal_api;
pub mod seed;

pub use mock_deal_api::MockDealApi;
