// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod access_tests;
mod close_job_tests;
mod helpers;
mod job_registry_tests;
mod session_tests;
mod storage_tests;
