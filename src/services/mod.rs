pub mod abi;
pub mod wallet_provider;
pub mod wallet_gateway;
pub mod contract_invoker;
pub mod catalog_client;
pub mod doi_registry;

pub use wallet_provider::{InjectedProvider, WalletCapability};
pub use wallet_gateway::WalletGateway;
pub use contract_invoker::ContractInvoker;
pub use catalog_client::{CatalogClient, MetadataCatalog};
pub use doi_registry::SubmittedDoiSet;
