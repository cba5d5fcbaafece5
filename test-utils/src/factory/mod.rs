//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let community = factory::community::create_community(&db, &user.id).await?;
//!
//! let (user, community, post) = factory::helpers::create_post_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("moderator")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod community;
pub mod helpers;
pub mod post;
pub mod user;

pub use comment::{create_comment, create_response};
pub use community::{add_member, create_community};
pub use post::create_post;
pub use user::create_user;
