// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! Connection setup, migrations and PRAGMA configuration live here. The
//! key/value queries themselves use plain Diesel DSL in the crate root.

pub mod sqlite;
