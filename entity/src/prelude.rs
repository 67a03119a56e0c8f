pub use super::category::Entity as Category;
pub use super::channel::Entity as Channel;
pub use super::server::Entity as Server;
pub use super::server_member::Entity as ServerMember;
pub use super::user::Entity as User;
