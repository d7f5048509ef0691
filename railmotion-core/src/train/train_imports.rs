#![allow(unused_imports)]

pub(crate) use super::motion_params::*;
pub(crate) use super::motion_report::*;
pub(crate) use super::resistance;
pub(crate) use super::tractive;
pub(crate) use super::train_motion::*;
pub(crate) use super::train_motion_sim::*;
pub(crate) use crate::imports::*;
