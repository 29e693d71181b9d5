//! Lifecycle hooks for the build pipeline.
//!
//! The host build framework owns a [`HookRegistry`] and dispatches events as
//! posts move through the build. Callbacks mutate the post in place and run
//! in registration order.

use std::collections::HashMap;

use crate::post::Post;

/// Build lifecycle events a hook can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    /// Fired once per discovered post, before rendering.
    PostInit,
}

type HookFn = Box<dyn Fn(&mut Post)>;

/// Registry of lifecycle callbacks, keyed by event.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<HookEvent, Vec<HookFn>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a callback to an event.
    pub fn register<F>(&mut self, event: HookEvent, hook: F)
    where
        F: Fn(&mut Post) + 'static,
    {
        self.hooks.entry(event).or_default().push(Box::new(hook));
    }

    /// Run every callback registered for `event` against `post`.
    ///
    /// An event with no callbacks is a no-op.
    pub fn dispatch(&self, event: HookEvent, post: &mut Post) {
        if let Some(hooks) = self.hooks.get(&event) {
            for hook in hooks {
                hook(post);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_runs_in_registration_order() {
        let mut registry = HookRegistry::new();
        registry.register(HookEvent::PostInit, |post| {
            post.set_metadata("trace", "first");
        });
        registry.register(HookEvent::PostInit, |post| {
            let prev = post.metadata_str("trace").unwrap_or("").to_string();
            post.set_metadata("trace", format!("{prev},second"));
        });

        let mut post = Post::new("posts/a.md");
        registry.dispatch(HookEvent::PostInit, &mut post);

        assert_eq!(post.metadata_str("trace"), Some("first,second"));
    }

    #[test]
    fn test_dispatch_without_hooks_is_noop() {
        let registry = HookRegistry::new();
        let mut post = Post::new("posts/a.md");
        registry.dispatch(HookEvent::PostInit, &mut post);

        assert!(post.metadata.is_empty());
    }
}
