mod comment;
mod community;
mod post;
mod user;
