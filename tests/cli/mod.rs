pub mod support;

mod links;
mod notes;
mod queries;
mod review;
mod transfer;
