//! The delta orchestrator.
//!
//! Construction runs once and eagerly:
//! 1. pick the write target (`support_props` for skip-render properties),
//! 2. split the spec and resolve stagger values for this item's index,
//! 3. parse by declared type or by inference (color, then unit, then number),
//! 4. bind the update variant for the parsed kind,
//! 5. create a `Tween` when the spec declared timing options.
//!
//! Updating is a pure function of `(eased, raw, is_forward)` and the descriptor:
//!
//! ```text
//! no curve:   value = start + eased * delta
//! with curve: value = curve(raw) * start + raw * delta
//! ```
//!
//! The curved form scales only `start` by the curve and `delta` by raw progress. It is not a
//! remapped linear interpolation and must stay this way.

use std::fmt;
use std::rc::Rc;

use vizij_props_core::{
    coercion::format_number, resolve_stagger, shared, PropValue, PropertyBag, PropertySpec,
    ProgressCallback, Rgba, TargetRef,
};
use vizij_tween_core::{Curve, Tween};

use crate::config::DeltaConfig;
use crate::custom::{CustomProperties, DeltaKind};
use crate::descriptor::{DeltaDescriptor, DeltaValues};
use crate::error::DeltaError;
use crate::parse::{parse_by_guess, parse_by_kind};
use crate::split::split_delta;

/// Construction input. Consumed by `Delta::new` and never mutated afterwards.
#[derive(Clone)]
pub struct DeltaProps {
    pub key: String,
    pub spec: PropertySpec,
    pub custom_properties: CustomProperties,
    /// Visible target. A private bag is used when absent.
    pub target: Option<TargetRef>,
    /// Receives skip-render properties instead of `target`.
    pub support_props: Option<TargetRef>,
    pub index: usize,
    pub total_items: usize,
    pub config: DeltaConfig,
}

impl DeltaProps {
    pub fn new(key: impl Into<String>, spec: PropertySpec) -> Self {
        Self {
            key: key.into(),
            spec,
            custom_properties: CustomProperties::new(),
            target: None,
            support_props: None,
            index: 0,
            total_items: 1,
            config: DeltaConfig::default(),
        }
    }

    pub fn with_custom_properties(mut self, custom_properties: CustomProperties) -> Self {
        self.custom_properties = custom_properties;
        self
    }

    pub fn with_target(mut self, target: TargetRef) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_support_props(mut self, support_props: TargetRef) -> Self {
        self.support_props = Some(support_props);
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_config(mut self, config: DeltaConfig) -> Self {
        self.config = config;
        self
    }
}

impl fmt::Debug for DeltaProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaProps")
            .field("key", &self.key)
            .field("spec", &self.spec)
            .field("custom_properties", &self.custom_properties)
            .field("target", &self.target.is_some())
            .field("support_props", &self.support_props.is_some())
            .field("index", &self.index)
            .field("total_items", &self.total_items)
            .field("config", &self.config)
            .finish()
    }
}

/// Update variant bound at construction, carrying the values it interpolates.
#[derive(Clone, Debug)]
enum Updater {
    Number { start: f64, delta: f64 },
    Unit { start: f64, delta: f64, unit: String },
    Color { start: Rgba, delta: Rgba },
}

fn updater_for(values: &DeltaValues) -> Updater {
    match *values {
        DeltaValues::Number { start, delta, .. } => Updater::Number { start, delta },
        DeltaValues::Unit {
            start,
            delta,
            ref unit,
            ..
        } => Updater::Unit {
            start,
            delta,
            unit: unit.clone(),
        },
        DeltaValues::Color { start, delta, .. } => Updater::Color { start, delta },
    }
}

#[inline]
fn interpolate(curve: Option<&Curve>, start: f64, delta: f64, eased: f64, raw: f64) -> f64 {
    match curve {
        None => start + eased * delta,
        Some(curve) => curve.call(raw) * start + raw * delta,
    }
}

/// Descriptor plus target plus the update variant chosen for the descriptor's kind.
/// Shared with the tween's progress callback.
struct Binding {
    key: String,
    descriptor: DeltaDescriptor,
    target: TargetRef,
    updater: Updater,
}

impl Binding {
    fn new(key: String, descriptor: DeltaDescriptor, target: TargetRef) -> Self {
        let updater = updater_for(&descriptor.values);
        Self {
            key,
            descriptor,
            target,
            updater,
        }
    }

    fn update(&self, eased: f64, raw: f64, _is_forward: bool) {
        let curve = self.descriptor.curve.as_ref();
        let value = match self.updater {
            Updater::Number { start, delta } => {
                PropValue::Number(interpolate(curve, start, delta, eased, raw))
            }
            Updater::Unit {
                start,
                delta,
                ref unit,
            } => {
                let v = interpolate(curve, start, delta, eased, raw);
                PropValue::Text(format!("{}{}", format_number(v), unit))
            }
            Updater::Color { start, delta } => {
                let r = interpolate(curve, start.r, delta.r, eased, raw).trunc();
                let g = interpolate(curve, start.g, delta.g, eased, raw).trunc();
                let b = interpolate(curve, start.b, delta.b, eased, raw).trunc();
                let a = interpolate(curve, start.a, delta.a, eased, raw);
                PropValue::Text(format!(
                    "rgba({}, {}, {}, {})",
                    format_number(r),
                    format_number(g),
                    format_number(b),
                    format_number(a)
                ))
            }
        };
        log::trace!("delta `{}` <- {}", self.key, value);
        self.target.borrow_mut().set(&self.key, value);
    }
}

/// One animated property of one item.
pub struct Delta {
    binding: Rc<Binding>,
    index: usize,
    tween: Option<Tween>,
}

impl Delta {
    pub fn new(props: DeltaProps) -> Result<Self, DeltaError> {
        let DeltaProps {
            key,
            spec,
            custom_properties,
            target,
            support_props,
            index,
            total_items,
            config,
        } = props;
        let custom = custom_properties.get(&key);

        let skip_render = custom.map_or(false, |c| c.is_skip_render);
        let target = if skip_render { support_props } else { target }
            .unwrap_or_else(|| -> TargetRef { shared(PropertyBag::new()) });

        let mut split = split_delta(&key, &spec)?;
        split.start = resolve_stagger(split.start, index, total_items);
        split.end = resolve_stagger(split.end, index, total_items);

        let descriptor = match custom.and_then(|c| c.kind) {
            Some(kind) => parse_by_kind(kind, &key, split, &config.default_unit)?,
            None => parse_by_guess(&key, split, &config.default_unit),
        };
        let kind = descriptor.kind();
        log::debug!(
            "delta `{key}` [{index}/{total_items}] parsed as {kind}{}",
            if skip_render { " (skip render)" } else { "" }
        );

        let binding = Rc::new(Binding::new(key, descriptor, target));

        let options = &binding.descriptor.tween_options;
        let tween = if options.is_empty() {
            None
        } else {
            let user_update = options.on_update.clone();
            let driven = Rc::clone(&binding);
            let on_update: ProgressCallback = Rc::new(move |eased, raw, is_forward| {
                driven.update(eased, raw, is_forward);
                if let Some(cb) = &user_update {
                    cb(eased, raw, is_forward);
                }
            });
            log::debug!("delta `{}` wired to a tween", binding.key);
            Some(Tween::new(
                options.with_on_update(on_update),
                index,
                &config.tween,
            )?)
        };

        Ok(Self {
            binding,
            index,
            tween,
        })
    }

    /// Write the interpolated value for this progress into the target.
    pub fn update(&self, eased: f64, raw: f64, is_forward: bool) -> &Self {
        self.binding.update(eased, raw, is_forward);
        self
    }

    pub fn key(&self) -> &str {
        &self.binding.key
    }

    pub fn kind(&self) -> DeltaKind {
        self.binding.descriptor.kind()
    }

    pub fn descriptor(&self) -> &DeltaDescriptor {
        &self.binding.descriptor
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn target(&self) -> &TargetRef {
        &self.binding.target
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn tween_mut(&mut self) -> Option<&mut Tween> {
        self.tween.as_mut()
    }
}

impl fmt::Debug for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delta")
            .field("key", &self.binding.key)
            .field("descriptor", &self.binding.descriptor)
            .field("index", &self.index)
            .field("tween", &self.tween)
            .finish()
    }
}
