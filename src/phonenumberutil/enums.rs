// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use strum::{Display, EnumIter, IntoStaticStr};

/// Outcome of matching a (possibly partial) national number against a
/// national number pattern.
#[derive(Debug, Display, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// **No match.**
    /// The number can not be completed into anything the pattern accepts.
    Invalid,
    /// **Match.**
    /// The number is accepted as is, or, when a prefix match was allowed, can
    /// still grow into an accepted number.
    Matched,
    /// **Match but too long.**
    /// A leading part of the number is accepted, but the number has already
    /// outgrown every string the pattern accepts.
    TooLong,
}
