#![allow(unused_imports)]

pub(crate) use crate::error::{RailmotionError, RailmotionResult};
pub(crate) use crate::format_dbg;
pub(crate) use crate::si;
pub(crate) use crate::traits::*;
pub(crate) use crate::uc;
pub(crate) use crate::units::UnitSystem;
pub(crate) use crate::utils;
pub(crate) use crate::utils::{almost_eq, almost_eq_uom};
pub(crate) use crate::validate::*;
pub(crate) use anyhow::{anyhow, bail, ensure, Context};
pub(crate) use easy_ext::ext;
pub(crate) use serde::{Deserialize, Serialize};
pub(crate) use std::cmp::Ordering;
pub(crate) use std::collections::BTreeMap;
pub(crate) use std::ffi::OsStr;
pub(crate) use std::fmt;
pub(crate) use std::fs::File;
pub(crate) use std::path::{Path, PathBuf};
pub(crate) use uom::ConstZero;
