// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{LoginRequest, login};
use kmrl_ragi::{Depot, MemoryStorage};

pub fn create_test_depot() -> Depot {
    Depot::init(Box::new(MemoryStorage::new()))
}

pub fn create_login_request(username: &str, password: &str, role: Option<&str>) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
        role: role.map(str::to_string),
    }
}

pub fn create_depot_as(role: &str) -> Depot {
    let mut depot: Depot = create_test_depot();
    login(&mut depot, &create_login_request("tester", "secret", Some(role))).unwrap();
    depot
}
