// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

mod date;
mod report;
mod tag;

pub use date::*;
pub use report::*;
pub use tag::*;
