// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod analytics;
pub mod log;
pub mod login;
pub mod settings;
pub mod trash;
pub mod wp_analytics;
pub mod wp_log;
