use super::*;
use crate::{CommandContext, MediaKind, Resource, TimeSpan};

/// Minimal filter kind driving the shared trait machinery in tests.
struct Merge {
    base: FilterBase,
}

impl Merge {
    fn new() -> Self {
        Self {
            base: FilterBase::new("merge", 2).unwrap(),
        }
    }
}

impl Filter for Merge {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }
}

fn video(name: &str, secs: f64) -> Resource {
    Resource::new(name, MediaKind::Video, TimeSpan::from_secs(secs).unwrap()).unwrap()
}

#[test]
fn base_rejects_zero_arity_and_empty_name() {
    assert!(FilterBase::new("merge", 0).is_err());
    assert!(FilterBase::new("", 1).is_err());
}

#[test]
fn setup_with_zero_resources_fails_empty_input() {
    let ctx = CommandContext::new();
    let mut f = Merge::new();
    let err = f.setup(&ctx, &[]).unwrap_err();
    assert!(matches!(err, GraphError::EmptyInput { .. }));
    assert!(!f.base().is_configured());
}

#[test]
fn setup_at_max_arity_succeeds_and_sums_lengths() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    let mut f = Merge::new();
    f.setup(&ctx, &[a, b]).unwrap();

    assert_eq!(f.bound().unwrap().len(), 2);
    assert_eq!(f.derived_length().unwrap().unwrap().as_secs(), 15.0);
}

#[test]
fn setup_past_max_arity_fails_arity_exceeded() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));
    let c = ctx.register(video("c.mp4", 2.0));

    let mut f = Merge::new();
    let err = f.setup(&ctx, &[a, b, c]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::ArityExceeded {
            max_inputs: 2,
            actual: 3,
            ..
        }
    ));
    assert!(!f.base().is_configured());
}

#[test]
fn queries_before_setup_fail_not_set_up() {
    let f = Merge::new();
    assert!(matches!(f.bound(), Err(GraphError::NotSetUp { .. })));
    assert!(matches!(f.derived_length(), Err(GraphError::NotSetUp { .. })));
    assert!(matches!(f.contract(), Err(GraphError::NotSetUp { .. })));
    assert!(matches!(f.output_kind(), Err(GraphError::NotSetUp { .. })));
}

#[test]
fn zero_length_binding_derives_unknown_not_zero() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("still.png", 0.0));

    let mut f = Merge::new();
    f.setup(&ctx, &[a]).unwrap();
    assert_eq!(f.derived_length().unwrap(), None);
}

#[test]
fn failed_resetup_keeps_previous_binding() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));
    let c = ctx.register(video("c.mp4", 2.0));

    let mut f = Merge::new();
    f.setup(&ctx, &[a, b]).unwrap();

    assert!(f.setup(&ctx, &[a, b, c]).is_err());
    let bound: Vec<_> = f.bound().unwrap().iter().map(|x| x.receipt()).collect();
    assert_eq!(bound, [a, b]);

    assert!(f.setup(&ctx, &[]).is_err());
    assert_eq!(f.bound().unwrap().len(), 2);
}

#[test]
fn successful_resetup_replaces_binding() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    let mut f = Merge::new();
    f.setup(&ctx, &[a, b]).unwrap();
    f.setup(&ctx, &[b]).unwrap();

    let bound: Vec<_> = f.bound().unwrap().iter().map(|x| x.receipt()).collect();
    assert_eq!(bound, [b]);
}

#[test]
fn contract_exposes_name_inputs_and_length() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    let mut f = Merge::new();
    f.setup(&ctx, &[a, b]).unwrap();

    let contract = f.contract().unwrap();
    assert_eq!(contract.name, "merge");
    assert_eq!(contract.inputs, vec![a.resource_id(), b.resource_id()]);
    assert_eq!(contract.length.unwrap().as_secs(), 15.0);

    let json = serde_json::to_value(&contract).unwrap();
    assert_eq!(json["name"], "merge");
    assert_eq!(json["length"], 15.0);
}
