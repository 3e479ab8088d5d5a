use std::cell::{Cell, RefCell};

use super::*;

// =============================================================
// Helpers
// =============================================================

/// Counts mounts; fails acquisition when `fail_acquire` is set.
#[derive(Default)]
struct CountingStaging {
    mounted: RefCell<Vec<u32>>,
    released: Cell<usize>,
    fail_acquire: bool,
}

impl Staging for CountingStaging {
    type Surface = u32;

    fn acquire(&self, width: u32, _height: u32) -> Result<u32, CaptureError> {
        if self.fail_acquire {
            return Err(CaptureError::Unsupported("test".to_owned()));
        }
        self.mounted.borrow_mut().push(width);
        Ok(width)
    }

    fn release(&self, surface: &u32) {
        self.mounted.borrow_mut().retain(|w| w != surface);
        self.released.set(self.released.get() + 1);
    }
}

fn draw_and_fail(staging: &CountingStaging) -> Result<u32, CaptureError> {
    let surface = Staged::acquire(staging, 10, 10)?;
    if *surface == 10 {
        return Err(CaptureError::Render("draw failed".to_owned()));
    }
    Ok(*surface)
}

fn draw_and_succeed(staging: &CountingStaging) -> Result<u32, CaptureError> {
    let surface = Staged::acquire(staging, 7, 7)?;
    assert_eq!(staging.mounted.borrow().as_slice(), &[7]);
    Ok(*surface * 2)
}

// =============================================================
// Guard behavior
// =============================================================

#[test]
fn surface_released_after_success() {
    let staging = CountingStaging::default();
    assert_eq!(draw_and_succeed(&staging), Ok(14));
    assert!(staging.mounted.borrow().is_empty());
    assert_eq!(staging.released.get(), 1);
}

#[test]
fn surface_released_after_failure() {
    let staging = CountingStaging::default();
    assert!(matches!(draw_and_fail(&staging), Err(CaptureError::Render(_))));
    assert!(staging.mounted.borrow().is_empty());
    assert_eq!(staging.released.get(), 1);
}

#[test]
fn failed_acquire_releases_nothing() {
    let staging = CountingStaging { fail_acquire: true, ..CountingStaging::default() };
    assert!(matches!(draw_and_succeed(&staging), Err(CaptureError::Unsupported(_))));
    assert_eq!(staging.released.get(), 0);
}

#[test]
fn guard_derefs_to_surface() {
    let staging = CountingStaging::default();
    let guard = Staged::acquire(&staging, 3, 3);
    assert!(matches!(guard.as_deref().copied(), Ok(3)));
}

// =============================================================
// DomStaging
// =============================================================

#[test]
fn export_captures_stage_quietly() {
    let options = CaptureOptions::for_export(&crate::config::ExportConfig::default());
    assert!(DomStaging::for_capture(&options).is_quiet());
}

#[test]
fn verbose_captures_stage_with_logging() {
    let options = CaptureOptions { allow_cross_origin: true, scale: 1.0, quiet: false };
    assert!(!DomStaging::for_capture(&options).is_quiet());
    assert!(!DomStaging::default().is_quiet());
}
