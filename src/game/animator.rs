use bevy::prelude::*;
use std::collections::HashMap;
use std::fmt;

// ── Parameter names driven by player movement ──────────────────────

pub const IS_WALKING: &str = "isWalking";
pub const INPUT_X: &str = "inputX";
pub const INPUT_Y: &str = "inputY";
pub const LAST_INPUT_X: &str = "lastInputX";
pub const LAST_INPUT_Y: &str = "lastInputY";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorParam {
    Bool(bool),
    Float(f32),
}

impl AnimatorParam {
    fn kind(&self) -> ParamKind {
        match self {
            AnimatorParam::Bool(_) => ParamKind::Bool,
            AnimatorParam::Float(_) => ParamKind::Float,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Bool,
    Float,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    Missing(String),
    WrongType {
        name: String,
        expected: ParamKind,
        found: ParamKind,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Missing(name) => write!(f, "animator parameter '{name}' does not exist"),
            ParamError::WrongType {
                name,
                expected,
                found,
            } => write!(
                f,
                "animator parameter '{name}' is {found:?}, not {expected:?}"
            ),
        }
    }
}

impl std::error::Error for ParamError {}

/// Named, typed animation parameters. Parameters must be declared before
/// they can be written.
#[derive(Component, Debug, Clone, Default)]
pub struct Animator {
    params: HashMap<String, AnimatorParam>,
}

impl Animator {
    /// Parameter set for a top-down walker.
    pub fn player_locomotion() -> Self {
        Self::default()
            .with_bool(IS_WALKING, false)
            .with_float(INPUT_X, 0.0)
            .with_float(INPUT_Y, 0.0)
            .with_float(LAST_INPUT_X, 0.0)
            .with_float(LAST_INPUT_Y, 0.0)
    }

    pub fn with_bool(mut self, name: &str, value: bool) -> Self {
        self.params.insert(name.into(), AnimatorParam::Bool(value));
        self
    }

    pub fn with_float(mut self, name: &str, value: f32) -> Self {
        self.params.insert(name.into(), AnimatorParam::Float(value));
        self
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<(), ParamError> {
        self.set(name, AnimatorParam::Bool(value))
    }

    pub fn set_float(&mut self, name: &str, value: f32) -> Result<(), ParamError> {
        self.set(name, AnimatorParam::Float(value))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, ParamError> {
        match self.params.get(name) {
            Some(AnimatorParam::Bool(v)) => Ok(*v),
            Some(other) => Err(wrong_type(name, ParamKind::Bool, other.kind())),
            None => Err(ParamError::Missing(name.into())),
        }
    }

    pub fn get_float(&self, name: &str) -> Result<f32, ParamError> {
        match self.params.get(name) {
            Some(AnimatorParam::Float(v)) => Ok(*v),
            Some(other) => Err(wrong_type(name, ParamKind::Float, other.kind())),
            None => Err(ParamError::Missing(name.into())),
        }
    }

    fn set(&mut self, name: &str, value: AnimatorParam) -> Result<(), ParamError> {
        let slot = self
            .params
            .get_mut(name)
            .ok_or_else(|| ParamError::Missing(name.into()))?;
        if slot.kind() != value.kind() {
            return Err(wrong_type(name, value.kind(), slot.kind()));
        }
        *slot = value;
        Ok(())
    }
}

fn wrong_type(name: &str, expected: ParamKind, found: ParamKind) -> ParamError {
    ParamError::WrongType {
        name: name.into(),
        expected,
        found,
    }
}
