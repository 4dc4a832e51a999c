//! Platform vibrator service contract.
//!
//! [`VibratorService`] is the request surface exposed upward to the
//! platform. Only the capability query and `on`/`off` must be provided;
//! every extended operation has a default body returning
//! [`Error::Unsupported`] naming itself, so hardware without amplitude
//! control, compositions, always-on effects or frequency introspection
//! implements nothing for them.

#![allow(async_fn_in_trait)]

use crate::callback::CallbackRef;
use vibrator_core::{
    Braking, Capabilities, CompositeEffect, CompositePrimitive, Effect, EffectStrength, Error,
    PrimitivePwle, Result,
};

/// Request surface of a vibrator HAL.
///
/// # Examples
///
/// ```
/// use vibrator_hal::{Vibrator, VibratorService};
/// use vibrator_hardware::mock::MockSink;
/// use vibrator_hardware::settings::VibratorSettings;
///
/// let (sink, _handle) = MockSink::new();
/// let vibrator = Vibrator::new(sink, VibratorSettings::default());
///
/// assert!(vibrator.set_amplitude(0.5).unwrap_err().is_unsupported());
/// ```
pub trait VibratorService {
    /// Report the capability bitmask.
    fn get_capabilities(&self) -> Result<Capabilities>;

    /// Stop any ongoing vibration.
    async fn off(&self) -> Result<()>;

    /// Vibrate for `timeout_ms`, notifying `callback` once it has elapsed.
    async fn on(&self, timeout_ms: i32, callback: Option<CallbackRef>) -> Result<()>;

    /// List the predefined effects `perform` accepts.
    fn get_supported_effects(&self) -> Result<Vec<Effect>>;

    /// Play a predefined effect, returning its duration in milliseconds.
    fn perform(
        &self,
        _effect: Effect,
        _strength: EffectStrength,
        _callback: Option<CallbackRef>,
    ) -> Result<i32> {
        Err(Error::unsupported("perform"))
    }

    fn set_amplitude(&self, _amplitude: f32) -> Result<()> {
        Err(Error::unsupported("set_amplitude"))
    }

    fn set_external_control(&self, _enabled: bool) -> Result<()> {
        Err(Error::unsupported("set_external_control"))
    }

    fn get_composition_delay_max(&self) -> Result<i32> {
        Err(Error::unsupported("get_composition_delay_max"))
    }

    fn get_composition_size_max(&self) -> Result<i32> {
        Err(Error::unsupported("get_composition_size_max"))
    }

    fn get_supported_primitives(&self) -> Result<Vec<CompositePrimitive>> {
        Err(Error::unsupported("get_supported_primitives"))
    }

    fn get_primitive_duration(&self, _primitive: CompositePrimitive) -> Result<i32> {
        Err(Error::unsupported("get_primitive_duration"))
    }

    fn compose(&self, _composite: &[CompositeEffect], _callback: Option<CallbackRef>) -> Result<()> {
        Err(Error::unsupported("compose"))
    }

    fn get_supported_always_on_effects(&self) -> Result<Vec<Effect>> {
        Err(Error::unsupported("get_supported_always_on_effects"))
    }

    fn always_on_enable(&self, _id: i32, _effect: Effect, _strength: EffectStrength) -> Result<()> {
        Err(Error::unsupported("always_on_enable"))
    }

    fn always_on_disable(&self, _id: i32) -> Result<()> {
        Err(Error::unsupported("always_on_disable"))
    }

    fn get_resonant_frequency(&self) -> Result<f32> {
        Err(Error::unsupported("get_resonant_frequency"))
    }

    fn get_q_factor(&self) -> Result<f32> {
        Err(Error::unsupported("get_q_factor"))
    }

    fn get_frequency_resolution(&self) -> Result<f32> {
        Err(Error::unsupported("get_frequency_resolution"))
    }

    fn get_frequency_minimum(&self) -> Result<f32> {
        Err(Error::unsupported("get_frequency_minimum"))
    }

    fn get_bandwidth_amplitude_map(&self) -> Result<Vec<f32>> {
        Err(Error::unsupported("get_bandwidth_amplitude_map"))
    }

    fn get_pwle_primitive_duration_max(&self) -> Result<i32> {
        Err(Error::unsupported("get_pwle_primitive_duration_max"))
    }

    fn get_pwle_composition_size_max(&self) -> Result<i32> {
        Err(Error::unsupported("get_pwle_composition_size_max"))
    }

    fn get_supported_braking(&self) -> Result<Vec<Braking>> {
        Err(Error::unsupported("get_supported_braking"))
    }

    fn compose_pwle(&self, _composite: &[PrimitivePwle], _callback: Option<CallbackRef>) -> Result<()> {
        Err(Error::unsupported("compose_pwle"))
    }
}
