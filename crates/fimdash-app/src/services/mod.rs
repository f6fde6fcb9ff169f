// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer: bridges the Dioxus UI to the dashboard backend client.
//
// Services are created once at start-up and handed to components through
// Dioxus context; nothing here is a global.

pub mod app_services;
pub mod data_dir;
