/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;
use thiserror::Error;

/// How the remainder of the non-exhausted side is appended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Drain
{
    /// Compare fronts until one side runs out, then append the other side.
    After,

    /// Legacy flow: the remainders are flushed inside the first comparison
    /// step, A's first and then B's. Yields nothing if either side is empty.
    Nested,
}

impl Default for Drain
{
    fn default() -> Self
    {
        Drain::After
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown drain mode `{0}` (expected `after` or `nested`)")]
pub struct ParseDrainError(String);

impl FromStr for Drain
{
    type Err = ParseDrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s
        {
            "after" => Ok(Drain::After),
            "nested" => Ok(Drain::Nested),
            _ => Err(ParseDrainError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Drain
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Drain::After => write!(f, "after"),
            Drain::Nested => write!(f, "nested"),
        }
    }
}

/// Takes the larger of the two fronts until one side is exhausted, then
/// appends what is left of the other. Equal fronts take from `b`.
pub fn merge<T>(a: &[T], b: &[T]) -> Vec<T>
    where T: Ord + Copy
{
    let (mut ia, mut ib) = (0, 0);
    let mut merged = Vec::with_capacity(a.len() + b.len());

    while ia < a.len() && ib < b.len()
    {
        if a[ia] > b[ib]
        {
            merged.push(a[ia]);
            ia += 1;
        }
        else
        {
            merged.push(b[ib]);
            ib += 1;
        }
    }

    merged.extend_from_slice(&a[ia..]);
    merged.extend_from_slice(&b[ib..]);

    merged
}

pub fn merge_nested<T>(a: &[T], b: &[T]) -> Vec<T>
    where T: Ord + Copy
{
    let (mut ia, mut ib) = (0, 0);
    let mut merged = Vec::with_capacity(a.len() + b.len());

    while ia < a.len() && ib < b.len()
    {
        if a[ia] > b[ib]
        {
            merged.push(a[ia]);
            ia += 1;
        }
        else
        {
            merged.push(b[ib]);
            ib += 1;
        }

        // both drains run to completion here, so the loop never repeats

        merged.extend_from_slice(&a[ia..]);
        ia = a.len();

        merged.extend_from_slice(&b[ib..]);
        ib = b.len();
    }

    merged
}

pub fn merge_with<T>(a: &[T], b: &[T], drain: Drain) -> Vec<T>
    where T: Ord + Copy
{
    match drain
    {
        Drain::After => merge(a, b),
        Drain::Nested => merge_nested(a, b),
    }
}

pub fn is_descending<T: Ord>(seq: &[T]) -> bool
{
    seq.windows(2).all(|pair| pair[0] >= pair[1])
}
