/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::Display;
use std::io::Write;

pub fn format_sequence<T: Display>(seq: &[T]) -> String {
    let mut result = String::new();

    for (i, value) in seq.iter().enumerate() {
        if i != 0 {
            result.push(' ');
        }

        result.push_str(&value.to_string());
    }

    result
}

/// Writes the sequence on a single line.
pub fn write_sequence<W, T>(write: &mut W, seq: &[T]) -> std::io::Result<()>
where
    W: Write,
    T: Display,
{
    writeln!(write, "{}", format_sequence(seq))
}
