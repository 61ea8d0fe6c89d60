//! Profile viewer library.
//!
//! A server-rendered web front end that looks up social-media profiles by
//! handle and renders the user record and recent posts fetched from a
//! backend JSON API.

#![allow(clippy::needless_raw_string_hashes)]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod handle;
pub mod profile;
pub mod recent;
pub mod search;
pub mod web;
