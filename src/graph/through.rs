use crate::graph::node::{GraphNode, RenderCtx};

/*
Serial Signal Chain (Through)
=============================

Through connects two nodes in series: the first (source) renders into the
buffer, the second (resonator) processes that buffer in place.

  StrikeNode renders:   [1.0, 0.0, 0.0, 0.0, ...]     the hit
  ModalNode in place:   [3e-6, 1e-5, 2e-5, ...]       the object ringing

Typical chains:

  // Plain struck object
  let bar = StrikeNode::impulse().through(ModalNode::new());

  // Mallet-like hit on a bell
  let bell = StrikeNode::noise_burst(96)
      .through(ModalNode::new().with_inharmonicity(0.9));

  // Two bodies in series: the first one's ringing excites the second
  let coupled = StrikeNode::impulse()
      .through(ModalNode::new().with_pitch(-12.0))
      .through(ModalNode::new().with_pitch(7.0));

Signal Flow
-----------
  [Source] ──→ [Resonator] ──→ output

Note events go to both nodes, so a strike re-triggers the exciter and resets
the resonator's decay tracking at the same time.
*/

pub struct Through<S, F> {
    source: S,
    filter: F,
}

impl<S, F> Through<S, F> {
    pub fn new(source: S, filter: F) -> Self {
        Self { source, filter }
    }
}

impl<S: GraphNode, F: GraphNode> GraphNode for Through<S, F> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.source.render_block(out, ctx);
        self.filter.render_block(out, ctx);
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        self.source.note_on(ctx);
        self.filter.note_on(ctx);
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        self.source.note_off(ctx);
        self.filter.note_off(ctx);
    }

    fn is_active(&self) -> bool {
        self.source.is_active() || self.filter.is_active()
    }
}
