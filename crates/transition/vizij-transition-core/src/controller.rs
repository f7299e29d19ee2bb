//! Transition controller: entrance animations, exit-then-navigate, and click
//! interception for one subject element (the document body by default).
//!
//! States:
//! - Idle
//! - Entering: an entrance animation is running; its end event returns to Idle.
//! - ExitPending: a [`TransitionRequest`] waits for the end event, then navigates.
//!
//! Exactly one animation-end listener is registered per subject at any time; it is
//! removed when it fires or when a newer request supersedes it.

use serde::{Deserialize, Serialize};

use crate::capability::{detect, CapabilitySet, StyleProbe};
use crate::click::{find_anchor_href, ClickNode, ClickOutcome};
use crate::config::TransitionConfig;
use crate::host::{Host, RequestToken};
use crate::stylesheet::{normalize_and_install, StylesheetSink, StylesheetSource};
use crate::trigger::{self, StyleTarget};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TransitionState {
    Idle,
    Entering,
    ExitPending,
}

/// One exit in flight: the animation playing and the navigation that follows it.
#[derive(Debug)]
pub struct TransitionRequest<L> {
    token: RequestToken,
    animation: String,
    action: String,
    listener: L,
}

impl<L> TransitionRequest<L> {
    #[inline]
    pub fn token(&self) -> RequestToken {
        self.token
    }

    #[inline]
    pub fn animation(&self) -> &str {
        &self.animation
    }

    /// URL navigated to once the animation ends.
    #[inline]
    pub fn action(&self) -> &str {
        &self.action
    }
}

#[derive(Debug)]
enum Phase<L> {
    Idle,
    Entering { token: RequestToken, listener: L },
    ExitPending(TransitionRequest<L>),
}

/// Reapply write queued on the host, kept so a newer start can cancel it.
struct QueuedRestart<D> {
    handle: D,
    identifier: String,
}

impl<L> Phase<L> {
    fn token(&self) -> Option<RequestToken> {
        match self {
            Phase::Idle => None,
            Phase::Entering { token, .. } => Some(*token),
            Phase::ExitPending(req) => Some(req.token),
        }
    }
}

pub struct TransitionController<H: Host> {
    host: H,
    caps: CapabilitySet,
    cfg: TransitionConfig,
    subject: H::Element,
    root: H::Element,
    phase: Phase<H::Listener>,
    restart: Option<QueuedRestart<H::Deferred>>,
    next_token: u32,
}

impl<H: Host> TransitionController<H> {
    /// Controller over `subject`, writing perspective settings on `root`.
    pub fn new(
        host: H,
        caps: CapabilitySet,
        cfg: TransitionConfig,
        subject: H::Element,
        root: H::Element,
    ) -> Self {
        Self {
            host,
            caps,
            cfg,
            subject,
            root,
            phase: Phase::Idle,
            restart: None,
            next_token: 0,
        }
    }

    /// Start-up sequence: detect capabilities, install the configured stylesheets
    /// (even when transitions are unsupported), then apply the configured
    /// perspective depth.
    pub fn initialize<P, S, K>(
        host: H,
        probe: &P,
        source: &S,
        sink: &mut K,
        cfg: TransitionConfig,
        subject: H::Element,
        root: H::Element,
    ) -> Self
    where
        P: StyleProbe + ?Sized,
        S: StylesheetSource + ?Sized,
        K: StylesheetSink + ?Sized,
    {
        let caps = detect(probe);
        normalize_and_install(&caps, source, sink, &cfg.stylesheets);
        let ctrl = Self::new(host, caps, cfg, subject, root);
        ctrl.set_perspective_depth(&ctrl.cfg.perspective_depth);
        ctrl
    }

    #[inline]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.caps
    }

    #[inline]
    pub fn config(&self) -> &TransitionConfig {
        &self.cfg
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn subject(&self) -> &H::Element {
        &self.subject
    }

    #[inline]
    pub fn root(&self) -> &H::Element {
        &self.root
    }

    #[inline]
    pub fn supports_transform_animation(&self) -> bool {
        self.caps.supports_transform_animation()
    }

    pub fn state(&self) -> TransitionState {
        match self.phase {
            Phase::Idle => TransitionState::Idle,
            Phase::Entering { .. } => TransitionState::Entering,
            Phase::ExitPending(_) => TransitionState::ExitPending,
        }
    }

    /// The exit waiting for its animation to end, if any.
    pub fn pending(&self) -> Option<&TransitionRequest<H::Listener>> {
        match &self.phase {
            Phase::ExitPending(req) => Some(req),
            _ => None,
        }
    }

    /// Play an entrance animation on the subject; a random bring-to-view
    /// animation when `animation` is `None`. No-op without transform+animation support.
    ///
    /// A pending exit is not cancelled: its listener stays registered and navigation
    /// follows whichever animation ends next.
    pub fn show_entrance(&mut self, animation: Option<&str>) {
        if !self.supports_transform_animation() {
            log::debug!(target: "vizij_transition", "show_entrance skipped: unsupported");
            return;
        }
        let Some(identifier) = self.resolve_identifier(animation, false) else {
            log::warn!(target: "vizij_transition", "show_entrance skipped: empty catalog");
            return;
        };
        if self.cfg.adjust_perspective_origin {
            self.adjust_perspective_origin();
        }
        if !matches!(self.phase, Phase::ExitPending(_)) {
            if let Some(event) = self.end_event() {
                let token = self.alloc_token();
                self.release_phase();
                let listener = self.host.listen_animation_end(&self.subject, event, token);
                self.phase = Phase::Entering { token, listener };
            }
        }
        self.start(&identifier);
    }

    /// Play an exit animation on the subject, then navigate to `action` once it ends.
    /// Without transform+animation support, navigates immediately.
    ///
    /// A trigger while another exit is pending supersedes it: the old listener is
    /// removed and only `action` will be navigated to.
    pub fn trigger_exit(&mut self, action: &str, animation: Option<&str>) {
        if !self.supports_transform_animation() {
            log::debug!(target: "vizij_transition", "trigger_exit: unsupported, navigating now");
            self.host.navigate(action);
            return;
        }
        let (Some(event), Some(identifier)) =
            (self.end_event(), self.resolve_identifier(animation, true))
        else {
            log::warn!(target: "vizij_transition", "trigger_exit: no exit animation, navigating now");
            self.host.navigate(action);
            return;
        };

        let token = self.alloc_token();
        self.release_phase();
        let listener = self.host.listen_animation_end(&self.subject, event, token);
        self.phase = Phase::ExitPending(TransitionRequest {
            token,
            animation: identifier.clone(),
            action: action.to_string(),
            listener,
        });
        self.start(&identifier);
    }

    /// Deliver an animation-end signal for the listener registered with `token`.
    /// Stale or repeated tokens are ignored, so each request is consumed once.
    pub fn handle_animation_end(&mut self, token: RequestToken) {
        if self.phase.token() != Some(token) {
            log::debug!(target: "vizij_transition", "ignoring stale animation end {token:?}");
            return;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Entering { listener, .. } => self.host.unlisten(listener),
            Phase::ExitPending(req) => {
                self.host.unlisten(req.listener);
                log::debug!(
                    target: "vizij_transition",
                    "exit {:?} finished, navigating to {}",
                    req.animation,
                    req.action
                );
                self.host.navigate(&req.action);
            }
        }
    }

    /// Route a click that reached the subject during capture. Clicks on (or inside)
    /// an anchor with no click handler anywhere on the chain become exits to the
    /// anchor's href; the caller must then suppress default handling and propagation.
    pub fn handle_click<N: ClickNode>(&mut self, target: N) -> ClickOutcome {
        match find_anchor_href(target) {
            Some(href) => {
                self.trigger_exit(&href, None);
                ClickOutcome::Intercepted { href }
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Perspective depth on the root element; no-op without perspective support.
    pub fn set_perspective_depth(&self, depth: &str) {
        match self.caps.perspective() {
            Some(perspective) => self.root.set_style_property(perspective.name(), depth),
            None => log::debug!(target: "vizij_transition", "set_perspective_depth skipped"),
        }
    }

    /// Centre the root perspective origin on the visible viewport to limit off-axis
    /// skew on tall content.
    pub fn adjust_perspective_origin(&self) {
        let Some(perspective) = self.caps.perspective() else {
            return;
        };
        if let Some(origin) = self.host.viewport().perspective_origin() {
            self.root
                .set_style_property(&perspective.sub("Origin"), &origin);
        }
    }

    /// Only the latest start may write the animation name: a restart still queued
    /// from an earlier reapply is cancelled first. If it was restarting the same
    /// animation, the name is still cleared and the restart is queued again.
    fn start(&mut self, identifier: &str) {
        let cancelled = self.restart.take().map(|queued| {
            self.host.cancel_deferred(queued.handle);
            queued.identifier
        });
        let deferred = if cancelled.as_deref() == Some(identifier) {
            trigger::restart(&self.subject, identifier, &self.caps, &self.cfg.timing)
        } else {
            trigger::apply(&self.subject, identifier, &self.caps, &self.cfg.timing)
        };
        if let Some(deferred) = deferred {
            let identifier = deferred.value().to_string();
            let handle = self.host.defer(deferred);
            self.restart = Some(QueuedRestart { handle, identifier });
        }
    }

    fn resolve_identifier(&mut self, requested: Option<&str>, exit: bool) -> Option<String> {
        if let Some(name) = requested.filter(|name| !name.is_empty()) {
            return Some(name.to_string());
        }
        let u = self.host.random_unit();
        let picked = if exit {
            self.cfg.catalog.pick_exit(u)
        } else {
            self.cfg.catalog.pick_entrance(u)
        };
        picked.map(str::to_string)
    }

    fn end_event(&self) -> Option<&'static str> {
        self.caps.animation_events().map(|events| events.end)
    }

    fn alloc_token(&mut self) -> RequestToken {
        let token = RequestToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        token
    }

    /// Back to Idle, removing whatever listener the current phase holds.
    fn release_phase(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Entering { listener, .. } => self.host.unlisten(listener),
            Phase::ExitPending(req) => {
                log::debug!(
                    target: "vizij_transition",
                    "exit to {} superseded before its animation ended",
                    req.action
                );
                self.host.unlisten(req.listener);
            }
        }
    }
}
