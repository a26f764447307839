pub mod messaging;
pub mod posting;
pub mod response;

pub use messaging::MessagingService;
pub use posting::PostingService;
