/*!
# Graph Representations

Storage backends implementing the traits of [`ops`](crate::ops).
Every representation in this module stores in-neighborhoods next to out-neighborhoods, making
in-degree queries and in-neighbor scans cheap for pull-style traversals.
*/

use crate::prelude::*;

mod directed;
mod neighborhood;

pub use directed::*;
pub use neighborhood::*;
