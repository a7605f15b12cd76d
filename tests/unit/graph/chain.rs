use super::*;
use crate::{Concat, Custom, MediaKind, Resource, Scale, TimeSpan, Trim};

fn video(name: &str, secs: f64) -> Resource {
    Resource::new(name, MediaKind::Video, TimeSpan::from_secs(secs).unwrap()).unwrap()
}

#[test]
fn merge_scenario_sums_durations() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    let mut chain = Filterchain::new(vec![a, b]);
    chain.append(Box::new(
        Custom::new("merge", 2, serde_json::Value::Null).unwrap(),
    ));

    chain.setup(&mut ctx).unwrap();

    let contracts = chain.contracts().unwrap();
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].name, "merge");
    assert_eq!(contracts[0].length.unwrap().as_secs(), 15.0);
}

#[test]
fn merge_scenario_with_third_input_fails_arity() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));
    let c = ctx.register(video("c.mp4", 2.0));

    let mut chain = Filterchain::new(vec![a, b, c]);
    chain.append(Box::new(
        Custom::new("merge", 2, serde_json::Value::Null).unwrap(),
    ));

    let err = chain.setup(&mut ctx).unwrap_err();
    assert!(matches!(err, GraphError::ArityExceeded { .. }));
    assert_eq!(chain.output(), None);
}

#[test]
fn chain_with_no_receipts_fails_empty_input() {
    let mut ctx = CommandContext::new();
    let mut chain = Filterchain::new(Vec::new());
    chain.append(Box::new(Concat::new()));

    let err = chain.setup(&mut ctx).unwrap_err();
    assert!(matches!(err, GraphError::EmptyInput { .. }));
}

#[test]
fn later_stages_consume_previous_stage_output() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    // Stage 0 concatenates two inputs; stage 1 trims the concatenated
    // result. Trim allows a single input, so it can only have been fed the
    // synthetic output of stage 0, never the chain's original receipts.
    let mut chain = Filterchain::new(vec![a, b]);
    chain.append(Box::new(Concat::new()));
    chain.append(Box::new(
        Trim::new(
            TimeSpan::from_secs(0.0).unwrap(),
            TimeSpan::from_secs(8.0).unwrap(),
        )
        .unwrap(),
    ));

    chain.setup(&mut ctx).unwrap();

    let contracts = chain.contracts().unwrap();
    assert_eq!(contracts[0].length.unwrap().as_secs(), 15.0);
    assert_eq!(contracts[1].inputs.len(), 1);
    assert_ne!(contracts[1].inputs[0], a.resource_id());
    assert_ne!(contracts[1].inputs[0], b.resource_id());
    assert_eq!(contracts[1].length.unwrap().as_secs(), 8.0);

    let out = chain.output().unwrap();
    assert_eq!(ctx.get(out).unwrap().length().as_secs(), 8.0);
}

#[test]
fn first_failure_leaves_later_stages_unset_up() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    // Scale accepts a single input, so stage 0 fails; the concat behind it
    // must never be bound.
    let mut chain = Filterchain::new(vec![a, b]);
    chain.append(Box::new(Scale::new(640, 360).unwrap()));
    chain.append(Box::new(Concat::new()));

    let err = chain.setup(&mut ctx).unwrap_err();
    assert!(matches!(err, GraphError::ArityExceeded { .. }));
    assert_eq!(chain.output(), None);

    let err = chain.contracts().unwrap_err();
    assert!(matches!(err, GraphError::NotSetUp { .. }));
}

#[test]
fn empty_chain_setup_is_a_no_op() {
    let mut ctx = CommandContext::new();
    ctx.register(video("a.mp4", 10.0));

    let mut chain = Filterchain::new(Vec::new());
    chain.setup(&mut ctx).unwrap();
    assert_eq!(chain.output(), None);
    assert!(chain.contracts().unwrap().is_empty());
}

#[test]
fn resetup_reuses_original_receipts_and_refreshes_output() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));

    let mut chain = Filterchain::new(vec![a]);
    chain.append(Box::new(Concat::new()));

    chain.setup(&mut ctx).unwrap();
    let first_out = chain.output().unwrap();

    chain.setup(&mut ctx).unwrap();
    let second_out = chain.output().unwrap();

    // Each setup mints a fresh synthetic output; both remain resolvable.
    assert_ne!(first_out, second_out);
    assert!(ctx.get(first_out).is_ok());
    assert!(ctx.get(second_out).is_ok());
}

#[test]
fn chain_output_feeds_another_chain() {
    let mut ctx = CommandContext::new();
    let a = ctx.register(video("a.mp4", 10.0));
    let b = ctx.register(video("b.mp4", 5.0));

    let mut first = Filterchain::new(vec![a, b]);
    first.append(Box::new(Concat::new()));
    first.setup(&mut ctx).unwrap();

    let mut second = Filterchain::new(vec![first.output().unwrap()]);
    second.append(Box::new(Scale::new(1280, 720).unwrap()));
    second.setup(&mut ctx).unwrap();

    let contracts = second.contracts().unwrap();
    assert_eq!(contracts[0].length.unwrap().as_secs(), 15.0);
}
