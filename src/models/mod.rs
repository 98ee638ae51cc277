pub mod answer;
pub mod error;
pub mod payload;
pub mod rpc;

// Re-export commonly used types
pub use answer::CountryResult;
pub use error::AgentError;
pub use payload::{InboundPayload, MessageBody, MessagePart};
pub use rpc::{RpcError, RpcResponse};
