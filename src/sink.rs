use crate::{EdgeId, VertexId};
use std::fmt::{Display, Formatter};

const TREE_RGB: (u8, u8, u8) = (62, 210, 29);
const FRONTIER_RGB: (u8, u8, u8) = (224, 90, 13);
const LOOP_RGB: (u8, u8, u8) = (207, 217, 218);

/// The visual categories a vertex or edge moves through while the tree grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    /// Part of the spanning tree.
    Tree,
    /// An edge with exactly one endpoint in the tree, a candidate for the next step.
    Frontier,
    /// An edge with both endpoints in the tree that is not a tree edge. Adding it
    /// would close a cycle.
    Loop,
}

impl ColorCategory {
    /// A conventional RGB encoding of the category: green for tree, orange for
    /// frontier and light grey for loop edges.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorCategory::Tree => TREE_RGB,
            ColorCategory::Frontier => FRONTIER_RGB,
            ColorCategory::Loop => LOOP_RGB,
        }
    }
}

impl Display for ColorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorCategory::Tree => "TREE",
            ColorCategory::Frontier => "FRONTIER",
            ColorCategory::Loop => "LOOP",
        };
        f.pad(name)
    }
}

/// Something a sink can colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Vertex(VertexId),
    Edge(EdgeId),
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Vertex(vertex) => write!(f, "vertex {vertex}"),
            Element::Edge(edge) => write!(f, "edge {edge}"),
        }
    }
}

/// Receives colour changes from the spanning tree runner, plus a pause between
/// steps. The runner does not touch its state while a sink is paused.
pub trait ColorSink {
    fn set_color(&mut self, element: Element, category: ColorCategory);

    fn pause(&mut self);
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    fn set_color(&mut self, element: Element, category: ColorCategory) {
        (**self).set_color(element, category)
    }

    fn pause(&mut self) {
        (**self).pause()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEvent {
    Color(Element, ColorCategory),
    Pause,
}

/// Keeps every event it receives, in order. Useful for replaying a run or for
/// asserting on what a visualiser would have been told.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink { events: Vec::new() }
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// The colour most recently given to `element`, if any.
    pub fn color_of(&self, element: Element) -> Option<ColorCategory> {
        self.events.iter().rev().find_map(|event| match event {
            SinkEvent::Color(e, category) if *e == element => Some(*category),
            _ => None,
        })
    }

    pub fn pause_count(&self) -> usize {
        self.events.iter().filter(|event| **event == SinkEvent::Pause).count()
    }

    /// Splits the recording at each pause, giving the colour changes made in each step.
    pub fn steps(&self) -> Vec<Vec<(Element, ColorCategory)>> {
        let mut steps = vec![Vec::new()];
        for event in &self.events {
            match event {
                SinkEvent::Color(element, category) => {
                    if let Some(current) = steps.last_mut() {
                        current.push((*element, *category));
                    }
                }
                SinkEvent::Pause => steps.push(Vec::new()),
            }
        }
        steps
    }
}

impl ColorSink for RecordingSink {
    fn set_color(&mut self, element: Element, category: ColorCategory) {
        self.events.push(SinkEvent::Color(element, category));
    }

    fn pause(&mut self) {
        self.events.push(SinkEvent::Pause);
    }
}

/// Prints colour changes to stdout, separating steps with a header line.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    step: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink { step: 0 }
    }
}

impl ColorSink for ConsoleSink {
    fn set_color(&mut self, element: Element, category: ColorCategory) {
        let (r, g, b) = category.rgb();
        let element = element.to_string();
        println!("  {element:<12} {category:<8} rgb({r}, {g}, {b})");
    }

    fn pause(&mut self) {
        self.step += 1;
        println!("-- step {} --", self.step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_encoding() {
        assert_eq!((62, 210, 29), ColorCategory::Tree.rgb());
        assert_eq!((224, 90, 13), ColorCategory::Frontier.rgb());
        assert_eq!((207, 217, 218), ColorCategory::Loop.rgb());
    }

    #[test]
    fn recording_keeps_latest_colour() {
        let mut sink = RecordingSink::new();
        let edge = Element::Edge(EdgeId(3));
        sink.set_color(edge, ColorCategory::Frontier);
        sink.pause();
        sink.set_color(edge, ColorCategory::Tree);

        assert_eq!(Some(ColorCategory::Tree), sink.color_of(edge));
        assert_eq!(None, sink.color_of(Element::Vertex(VertexId(3))));
        assert_eq!(1, sink.pause_count());
        assert_eq!(
            vec![vec![(edge, ColorCategory::Frontier)], vec![(edge, ColorCategory::Tree)]],
            sink.steps()
        );
    }

    fn pause_twice<S: ColorSink>(mut sink: S) {
        sink.pause();
        sink.pause();
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut sink = RecordingSink::new();
        pause_twice(&mut sink);
        assert_eq!(&[SinkEvent::Pause, SinkEvent::Pause], sink.events());
    }
}
