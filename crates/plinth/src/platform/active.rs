//! A per-thread slot through which a window procedure reaches the handler of
//! the loop that is currently dispatching to it.
//!
//! The slot hands out at most one `&mut` at a time. While [`with`] runs, the
//! value is withdrawn from the slot, so messages the platform sends
//! synchronously from inside the handler find it empty and get default
//! handling instead of a second mutable reference.

use std::{cell::Cell, marker::PhantomData, ptr};

thread_local! {
    static ACTIVE: Cell<*mut ()> = Cell::new(ptr::null_mut());
}

/// Keeps a value reachable through [`with`] until dropped.
pub struct Installed<'a, T> {
    previous: *mut (),
    _target: PhantomData<&'a mut T>,
}

pub fn install<T>(target: &mut T) -> Installed<'_, T> {
    let target: *mut T = target;
    let previous = ACTIVE.with(|active| active.replace(target.cast()));
    Installed {
        previous,
        _target: PhantomData,
    }
}

impl<T> Drop for Installed<'_, T> {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.set(self.previous));
    }
}

/// Runs `f` on the installed value, or returns `None` if nothing is installed
/// or the value is already borrowed further up the stack.
///
/// # Safety
///
/// `T` must be the type of the value passed to the innermost live
/// [`install`] on this thread.
pub unsafe fn with<T, R>(f: impl FnOnce(&mut T) -> R) -> Option<R> {
    let target = ACTIVE.with(|active| active.replace(ptr::null_mut()));
    let _restore = Restore(target);
    target.cast::<T>().as_mut().map(f)
}

/// Puts a withdrawn value back into the slot.
struct Restore(*mut ());

impl Drop for Restore {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.set(self.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot() {
        assert_eq!(unsafe { with(|count: &mut u32| *count) }, None);
    }

    #[test]
    fn installed_value_is_reachable() {
        let mut count = 0_u32;
        {
            let _installed = install(&mut count);
            assert_eq!(unsafe { with(|count: &mut u32| *count += 1) }, Some(()));
            assert_eq!(unsafe { with(|count: &mut u32| *count += 1) }, Some(()));
        }
        assert_eq!(count, 2);
        assert_eq!(unsafe { with(|count: &mut u32| *count) }, None);
    }

    #[test]
    fn nested_access_is_refused() {
        let mut count = 0_u32;
        let _installed = install(&mut count);

        let nested = unsafe {
            with(|count: &mut u32| {
                *count += 1;
                with(|count: &mut u32| *count += 1)
            })
        };
        assert_eq!(nested, Some(None));

        // The value is back once the outer borrow ends.
        assert_eq!(unsafe { with(|count: &mut u32| *count) }, Some(1));
    }

    #[test]
    fn inner_install_is_undone_on_drop() {
        let mut outer = 1_u32;
        let mut inner = 2_u32;
        let _outer = install(&mut outer);
        {
            let _inner = install(&mut inner);
            assert_eq!(unsafe { with(|value: &mut u32| *value) }, Some(2));
        }
        assert_eq!(unsafe { with(|value: &mut u32| *value) }, Some(1));
    }
}
