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

use strum::EnumIter;

/// Display conventions a phone number can be rendered in.
///
/// For a French mobile number the styles look like:
/// - **E164**: `+33612345678`
/// - **INTERNATIONAL**: `+33 6 12 34 56 78`
/// - **NATIONAL**: `06 12 34 56 78`
/// - **RFC3966**: `tel:+33-6-12-34-56-78`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// Canonical machine form: a `+`, the country code and the national
    /// number, without separators or extension.
    E164,
    /// **International format.**
    /// The country code followed by the national number laid out with the
    /// territory's international template.
    International,
    /// **National format.**
    /// The form used for dialing within the country, including the national
    /// prefix where the territory's rule asks for it.
    National,
    /// **RFC3966 format.**
    /// A `tel:` URI with hyphens as the only separators and `;ext=` for
    /// extensions.
    RFC3966,
}
