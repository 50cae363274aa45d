pub(crate) use super::SearchRun;
pub(crate) use crate::board::{Board, CanonicalKey, Location};
pub(crate) use crate::errors::{BoardError, SearchError};
pub(crate) use crate::priority_queue::PriorityQueue;
pub(crate) use crate::strategy::{Observer, Outcome};
pub(crate) use rand::Rng;
pub(crate) use std::collections::HashSet;
