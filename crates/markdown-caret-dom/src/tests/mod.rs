//! Shared test fixture: an in-memory DOM implementing the host traits.
//!
//! Nodes live in a flat arena behind `Rc<RefCell<..>>`; handles are cheap
//! ids into it, matching the handle-like feel of real DOM bindings. The
//! fixture records native scroll calls and can switch its selection
//! service off to exercise the degraded paths.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dom::host::{Element, Host, Node};
use crate::dom::tree::closest;
use crate::selection::range::{Selection, TextRange};

#[derive(Default)]
struct NodeData {
    parent: Option<usize>,
    offset_parent: Option<usize>,
    offset_top: i32,
    offset_left: i32,
    offset_height: i32,
    scroll_top: i32,
    scrollable: bool,
    editable: bool,
    text: String,
}

/// Boundary points as (node id, byte offset).
#[derive(Clone, Copy)]
struct RawRange {
    start: (usize, usize),
    end: (usize, usize),
}

#[derive(Default)]
struct DomState {
    nodes: Vec<NodeData>,
    selection: Option<RawRange>,
    selection_service_disabled: bool,
    native_scroll: bool,
    scrolled_into_view: Vec<usize>,
}

#[derive(Clone)]
pub struct TestDom {
    state: Rc<RefCell<DomState>>,
}

impl TestDom {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(DomState::default())),
        }
    }

    pub fn node(&self) -> NodeBuilder {
        NodeBuilder {
            dom: self.clone(),
            data: NodeData::default(),
        }
    }

    /// Makes `scroll_into_view_if_needed` report success from now on.
    pub fn enable_native_scroll(&self) {
        self.state.borrow_mut().native_scroll = true;
    }

    pub fn was_scrolled_natively(&self, node: &TestNode) -> bool {
        self.state.borrow().scrolled_into_view.contains(&node.id)
    }

    /// Makes `Host::selection` return `None` from now on.
    pub fn disable_selection_service(&self) {
        self.state.borrow_mut().selection_service_disabled = true;
    }

    /// Places a collapsed selection at `offset` within `node`, bypassing
    /// the selection service.
    pub fn set_caret(&self, node: &TestNode, offset: usize) {
        self.state.borrow_mut().selection = Some(RawRange {
            start: (node.id, offset),
            end: (node.id, offset),
        });
    }

    pub fn select(&self, start: &TestNode, start_offset: usize, end: &TestNode, end_offset: usize) {
        self.state.borrow_mut().selection = Some(RawRange {
            start: (start.id, start_offset),
            end: (end.id, end_offset),
        });
    }

    /// Raw selection boundaries for assertions, as ((node, offset), (node, offset)).
    pub fn selection_raw(&self) -> Option<((usize, usize), (usize, usize))> {
        self.state
            .borrow()
            .selection
            .map(|raw| (raw.start, raw.end))
    }

    pub fn is_editable(&self, node: &TestNode) -> bool {
        self.state.borrow().nodes[node.id].editable
    }

    fn is_scrollable(&self, node: &TestNode) -> bool {
        self.state.borrow().nodes[node.id].scrollable
    }
}

impl Host for TestDom {
    type Element = TestNode;
    type Range = TestRange;
    type Selection = TestSelection;

    fn selection(&self) -> Option<TestSelection> {
        if self.state.borrow().selection_service_disabled {
            return None;
        }
        Some(TestSelection { dom: self.clone() })
    }

    fn scroll_container_for(&self, element: &TestNode) -> Option<TestNode> {
        let parent = element.parent()?;
        closest(&parent, |node| self.is_scrollable(node))
    }
}

pub struct NodeBuilder {
    dom: TestDom,
    data: NodeData,
}

impl NodeBuilder {
    pub fn parent(mut self, parent: &TestNode) -> Self {
        self.data.parent = Some(parent.id);
        self
    }

    pub fn offset_parent(mut self, parent: &TestNode) -> Self {
        self.data.offset_parent = Some(parent.id);
        self
    }

    pub fn at(mut self, top: i32, left: i32) -> Self {
        self.data.offset_top = top;
        self.data.offset_left = left;
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.data.offset_height = height;
        self
    }

    pub fn scroll_top(mut self, scroll_top: i32) -> Self {
        self.data.scroll_top = scroll_top;
        self
    }

    pub fn scrollable(mut self) -> Self {
        self.data.scrollable = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.data.editable = true;
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.data.text = text.to_string();
        self
    }

    pub fn build(self) -> TestNode {
        let mut state = self.dom.state.borrow_mut();
        state.nodes.push(self.data);
        let id = state.nodes.len() - 1;
        drop(state);
        TestNode { dom: self.dom, id }
    }
}

#[derive(Clone)]
pub struct TestNode {
    dom: TestDom,
    id: usize,
}

impl TestNode {
    pub fn id(&self) -> usize {
        self.id
    }
}

impl PartialEq for TestNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.dom.state, &other.dom.state)
    }
}

impl fmt::Debug for TestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestNode({})", self.id)
    }
}

impl Node for TestNode {
    fn parent(&self) -> Option<Self> {
        let parent = self.dom.state.borrow().nodes[self.id].parent?;
        Some(TestNode {
            dom: self.dom.clone(),
            id: parent,
        })
    }
}

impl Element for TestNode {
    fn offset_top(&self) -> i32 {
        self.dom.state.borrow().nodes[self.id].offset_top
    }

    fn offset_left(&self) -> i32 {
        self.dom.state.borrow().nodes[self.id].offset_left
    }

    fn offset_height(&self) -> i32 {
        self.dom.state.borrow().nodes[self.id].offset_height
    }

    fn offset_parent(&self) -> Option<Self> {
        let parent = self.dom.state.borrow().nodes[self.id].offset_parent?;
        Some(TestNode {
            dom: self.dom.clone(),
            id: parent,
        })
    }

    fn scroll_top(&self) -> i32 {
        self.dom.state.borrow().nodes[self.id].scroll_top
    }

    fn set_scroll_top(&self, value: i32) {
        self.dom.state.borrow_mut().nodes[self.id].scroll_top = value;
    }

    fn scroll_into_view_if_needed(&self) -> bool {
        let mut state = self.dom.state.borrow_mut();
        if !state.native_scroll {
            return false;
        }
        state.scrolled_into_view.push(self.id);
        true
    }
}

#[derive(Clone)]
pub struct TestRange {
    dom: TestDom,
    start: (usize, usize),
    end: (usize, usize),
}

impl PartialEq for TestRange {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && Rc::ptr_eq(&self.dom.state, &other.dom.state)
    }
}

impl fmt::Debug for TestRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestRange({:?}..{:?})", self.start, self.end)
    }
}

impl TextRange for TestRange {
    type Node = TestNode;

    fn end_container(&self) -> TestNode {
        TestNode {
            dom: self.dom.clone(),
            id: self.end.0,
        }
    }

    fn end_offset(&self) -> usize {
        self.end.1
    }

    fn text(&self) -> String {
        let state = self.dom.state.borrow();
        if self.start.0 == self.end.0 {
            return state.nodes[self.start.0].text[self.start.1..self.end.1].to_string();
        }
        // Boundaries in different nodes: the tail of the start node
        // followed by the head of the end node.
        let mut text = state.nodes[self.start.0].text[self.start.1..].to_string();
        text.push_str(&state.nodes[self.end.0].text[..self.end.1]);
        text
    }

    fn collapse(&mut self, to_start: bool) {
        if to_start {
            self.end = self.start;
        } else {
            self.start = self.end;
        }
    }

    fn set_start(&mut self, node: &TestNode, offset: usize) {
        self.start = (node.id, offset);
    }
}

pub struct TestSelection {
    dom: TestDom,
}

impl Selection for TestSelection {
    type Range = TestRange;

    fn first_range(&self) -> Option<TestRange> {
        let raw = self.dom.state.borrow().selection?;
        Some(TestRange {
            dom: self.dom.clone(),
            start: raw.start,
            end: raw.end,
        })
    }

    fn replace_ranges(&self, range: TestRange) {
        self.dom.state.borrow_mut().selection = Some(RawRange {
            start: range.start,
            end: range.end,
        });
    }
}
