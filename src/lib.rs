// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod error;
pub mod logging;
pub mod mailer;
pub mod middleware;
pub mod routes;
pub mod submission;
pub mod templates;
pub mod validation;
