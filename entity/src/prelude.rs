pub use super::comment::Entity as Comment;
pub use super::community::Entity as Community;
pub use super::community_member::Entity as CommunityMember;
pub use super::post::Entity as Post;
pub use super::post_vote::Entity as PostVote;
pub use super::user::Entity as User;
