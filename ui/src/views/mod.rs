mod home;
mod listings;
mod nodes;
mod ratings;
mod useragents;
mod vendors;

pub use home::Home;
pub use listings::Listings;
pub use nodes::Nodes;
pub use ratings::Ratings;
pub use useragents::UserAgents;
pub use vendors::Vendors;
