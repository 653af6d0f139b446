use gloo::render::{request_animation_frame, AnimationFrame};
use shared::countup::{CountUp, DEFAULT_DURATION_MS};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Configuration for a count-up animation
#[derive(Clone, PartialEq)]
pub struct CountUpConfig {
    pub duration_ms: f64,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

type FrameHandle = Rc<RefCell<Option<AnimationFrame>>>;

/// Hook animating a displayed value from 0 to `target` once `armed` flips
/// to true.
///
/// Each mounted instance owns at most one pending animation-frame request;
/// every frame callback either reschedules itself or stops at completion.
/// Dropping the handle cancels the pending frame, so unmounting (or
/// disarming) mid-flight never updates a discarded instance.
#[hook]
pub fn use_count_up(target: f64, armed: bool, config: CountUpConfig) -> f64 {
    let value = use_state(|| 0.0f64);

    {
        let value = value.clone();
        use_effect_with((armed, target, config), move |(armed, target, config)| {
            let frame: FrameHandle = Rc::new(RefCell::new(None));

            if *armed {
                let mut countup = CountUp::new(*target, config.duration_ms);
                countup.arm();
                schedule_tick(
                    Rc::new(RefCell::new(countup)),
                    frame.clone(),
                    value.setter(),
                );
            } else {
                value.set(0.0);
            }

            move || {
                // Cancels any in-flight frame request.
                frame.borrow_mut().take();
            }
        });
    }

    *value
}

fn schedule_tick(countup: Rc<RefCell<CountUp>>, frame: FrameHandle, setter: UseStateSetter<f64>) {
    let handle = {
        let countup = countup.clone();
        let frame = frame.clone();
        request_animation_frame(move |timestamp| {
            let shown = countup.borrow_mut().tick(timestamp);
            setter.set(shown);
            if countup.borrow().is_complete() {
                frame.borrow_mut().take();
            } else {
                schedule_tick(countup, frame.clone(), setter);
            }
        })
    };
    *frame.borrow_mut() = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = CountUpConfig::default();
        assert_eq!(config.duration_ms, 2000.0);
    }
}
