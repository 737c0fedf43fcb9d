pub mod handlers;
pub mod server;

pub use handlers::TradePayload;
pub use server::ApiServer;
