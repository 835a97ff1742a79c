// SPDX-License-Identifier: MPL-2.0
//! `iced_apply` is an application form page built with the Iced GUI framework.
//!
//! It shows an application form over a backdrop of drifting shapes and plays
//! a simulated submission: loading overlay, success card, then a toast. The
//! timing of that feedback lives in [`sequencer`] and runs on the virtual
//! clock of [`scheduler`], so it can be driven and tested without waiting.

#![doc(html_root_url = "https://docs.rs/iced_apply/0.1.0")]

pub mod app;
pub mod error;
pub mod form;
pub mod i18n;
pub mod scheduler;
pub mod sequencer;
pub mod ui;
