//! In-memory page used by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use vizij_transition_core::{
    CapabilitySet, ClickNode, DeferredAssignment, Host, RequestToken, StyleProbe, StyleTarget,
    TransitionConfig, TransitionController, VendorFamily, ViewportMetrics,
};

#[derive(Default)]
struct ElementState {
    style: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

/// Element handle; clones share the same style.
#[derive(Clone, Default)]
pub struct MockElement(Rc<RefCell<ElementState>>);

impl MockElement {
    /// Every value written to `name`, in order.
    pub fn writes_to(&self, name: &str) -> Vec<String> {
        self.0
            .borrow()
            .writes
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.0.borrow().writes.len()
    }
}

impl StyleTarget for MockElement {
    fn style_property(&self, name: &str) -> String {
        self.0.borrow().style.get(name).cloned().unwrap_or_default()
    }

    fn set_style_property(&self, name: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        state.style.insert(name.to_string(), value.to_string());
        state.writes.push((name.to_string(), value.to_string()));
    }
}

#[derive(Debug)]
pub struct MockListener {
    pub id: u32,
    pub event: &'static str,
    pub token: RequestToken,
}

#[derive(Default)]
pub struct MockHost {
    pub navigations: Vec<String>,
    /// Queued next-turn writes with their handles.
    pub deferred: VecDeque<(u32, DeferredAssignment<MockElement>)>,
    pub queued: u32,
    pub cancelled: Vec<u32>,
    pub listeners: Vec<MockListener>,
    pub registered: u32,
    pub randoms: VecDeque<f64>,
    pub viewport: ViewportMetrics,
}

impl MockHost {
    pub fn with_randoms(randoms: &[f64]) -> Self {
        Self {
            randoms: randoms.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Host for MockHost {
    type Element = MockElement;
    type Listener = u32;
    type Deferred = u32;

    fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }

    fn defer(&mut self, assignment: DeferredAssignment<MockElement>) -> u32 {
        let id = self.queued;
        self.queued += 1;
        self.deferred.push_back((id, assignment));
        id
    }

    fn cancel_deferred(&mut self, handle: u32) {
        self.cancelled.push(handle);
        self.deferred.retain(|(id, _)| *id != handle);
    }

    fn listen_animation_end(
        &mut self,
        _element: &MockElement,
        event: &'static str,
        token: RequestToken,
    ) -> u32 {
        let id = self.registered;
        self.registered += 1;
        self.listeners.push(MockListener { id, event, token });
        id
    }

    fn unlisten(&mut self, listener: u32) {
        self.listeners.retain(|l| l.id != listener);
    }

    fn random_unit(&mut self) -> f64 {
        self.randoms.pop_front().unwrap_or(0.0)
    }
}

pub type Controller = TransitionController<MockHost>;

pub fn webkit_caps() -> CapabilitySet {
    CapabilitySet::from_families(
        Some(VendorFamily::Webkit),
        Some(VendorFamily::Webkit),
        Some(VendorFamily::Webkit),
    )
}

pub fn standard_caps() -> CapabilitySet {
    CapabilitySet::from_families(
        Some(VendorFamily::Standard),
        Some(VendorFamily::Standard),
        Some(VendorFamily::Standard),
    )
}

pub fn controller(caps: CapabilitySet, host: MockHost) -> Controller {
    TransitionController::new(
        host,
        caps,
        TransitionConfig::default(),
        MockElement::default(),
        MockElement::default(),
    )
}

/// Run the next event-loop turn: complete every deferred style write.
pub fn next_turn(ctrl: &mut Controller) {
    let tasks: Vec<_> = ctrl.host_mut().deferred.drain(..).collect();
    for (_, task) in tasks {
        task.complete();
    }
}

/// Dispatch the animation-end event to every listener currently registered.
pub fn fire_animation_end(ctrl: &mut Controller) {
    let tokens: Vec<RequestToken> = ctrl.host().listeners.iter().map(|l| l.token).collect();
    for token in tokens {
        ctrl.handle_animation_end(token);
    }
}

/// Style probe recognising a fixed set of property names.
pub struct SetProbe(pub HashSet<String>);

impl SetProbe {
    pub fn new(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl StyleProbe for SetProbe {
    fn supports(&self, property: &str) -> bool {
        self.0.contains(property)
    }
}

struct NodeData {
    parent: Option<usize>,
    handler: bool,
    href: Option<String>,
}

/// Arena-backed node tree for click routing.
#[derive(Clone)]
pub struct MockNode {
    tree: Rc<RefCell<Vec<NodeData>>>,
    at: usize,
}

impl MockNode {
    /// A fresh tree holding only the subject (body) node.
    pub fn body() -> Self {
        Self {
            tree: Rc::new(RefCell::new(vec![NodeData {
                parent: None,
                handler: false,
                href: None,
            }])),
            at: 0,
        }
    }

    fn push(&self, handler: bool, href: Option<&str>) -> Self {
        let mut tree = self.tree.borrow_mut();
        tree.push(NodeData {
            parent: Some(self.at),
            handler,
            href: href.map(String::from),
        });
        Self {
            tree: self.tree.clone(),
            at: tree.len() - 1,
        }
    }

    pub fn child(&self) -> Self {
        self.push(false, None)
    }

    pub fn child_with_handler(&self) -> Self {
        self.push(true, None)
    }

    pub fn anchor(&self, href: &str) -> Self {
        self.push(false, Some(href))
    }

    pub fn set_handler(&self, handler: bool) {
        self.tree.borrow_mut()[self.at].handler = handler;
    }
}

impl ClickNode for MockNode {
    fn parent(&self) -> Option<Self> {
        self.tree.borrow()[self.at].parent.map(|at| Self {
            tree: self.tree.clone(),
            at,
        })
    }

    fn has_click_handler(&self) -> bool {
        self.tree.borrow()[self.at].handler
    }

    fn anchor_href(&self) -> Option<String> {
        self.tree.borrow()[self.at].href.clone()
    }
}
