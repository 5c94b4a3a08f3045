#![allow(dead_code)]

pub mod warn;
pub mod util;
pub mod error;
pub mod markup;
pub mod page;
pub mod document;
pub mod templates;
pub mod source;
pub mod cache;
pub mod tabs;
pub mod workbench;
pub mod view;
pub mod events;
pub mod config;
pub mod server;
