// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::SqliteStorage;

pub fn create_test_storage() -> SqliteStorage {
    SqliteStorage::new_in_memory().unwrap()
}
