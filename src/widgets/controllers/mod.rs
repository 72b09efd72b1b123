//! # Controllers Module
//!
//! Contains the controller that mounts widgets and drives the repaint loop.

pub mod app_controller;

pub use app_controller::AppController;
