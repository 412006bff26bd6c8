#![forbid(unsafe_code)]

use ql_engine::{AddNodeRequest, EngineError, GoalEngine, NodeId, NodeIdError, NodeKind};

fn add(engine: &mut GoalEngine, parent: &NodeId, title: &str) -> NodeId {
    engine
        .add_node(AddNodeRequest::new(parent, title))
        .expect("add node")
        .event
        .node_id
        .expect("event node id")
}

#[test]
fn kinds_follow_the_parent_tier_and_ids_follow_the_kind() {
    let mut engine = GoalEngine::new("  Quest  ").expect("engine");
    let root = engine.root_id().clone();
    assert_eq!(root.as_str(), "QUEST-001");
    assert_eq!(engine.get(&root).expect("root").title, "Quest");
    assert_eq!(engine.get(&root).expect("root").importance, 100);

    let milestone = add(&mut engine, &root, "M");
    let subgoal = add(&mut engine, &milestone, "S");
    let task = add(&mut engine, &subgoal, "T");
    let second_milestone = add(&mut engine, &root, "M2");

    assert_eq!(milestone.as_str(), "MS-001");
    assert_eq!(subgoal.as_str(), "SG-001");
    assert_eq!(task.as_str(), "TASK-001");
    assert_eq!(second_milestone.as_str(), "MS-002");

    assert_eq!(engine.get(&milestone).expect("m").kind, NodeKind::Milestone);
    assert_eq!(engine.get(&subgoal).expect("s").kind, NodeKind::Subgoal);
    let task_node = engine.get(&task).expect("t");
    assert_eq!(task_node.kind, NodeKind::Task);
    assert_eq!(task_node.weight, 1);
    assert_eq!(task_node.parent_id.as_ref(), Some(&subgoal));

    let err = engine.add_node(AddNodeRequest::new(&task, "Nope")).unwrap_err();
    assert_eq!(err, EngineError::InvalidOperation("tasks cannot hold children"));
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let first = add(&mut engine, &root, "First");
    engine.delete_node(&first).expect("delete");
    let second = add(&mut engine, &root, "Second");
    assert_eq!(second.as_str(), "MS-002");
}

#[test]
fn deletion_cascades_through_the_whole_subtree() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let keep_a = add(&mut engine, &root, "Keep A");
    let target = add(&mut engine, &root, "Target");
    let keep_b = add(&mut engine, &root, "Keep B");

    let mut doomed = vec![target.clone()];
    for s in 0..3 {
        let subgoal = add(&mut engine, &target, &format!("S{s}"));
        doomed.push(subgoal.clone());
        for t in 0..3 {
            doomed.push(add(&mut engine, &subgoal, &format!("S{s} T{t}")));
        }
    }
    assert_eq!(doomed.len(), 13);
    assert_eq!(engine.store().len(), 16);

    let result = engine.delete_node(&target).expect("delete");
    let payload: serde_json::Value =
        serde_json::from_str(&result.event.payload_json).expect("payload json");
    assert_eq!(payload["removed_count"], 13);
    assert_eq!(payload["removed"][0], target.as_str());

    let ids = result.tree.ids();
    for id in &doomed {
        assert!(!ids.iter().any(|live| live == id.as_str()), "{id} survived");
        assert!(!engine.store().contains(id));
        assert_eq!(engine.get(id).unwrap_err(), EngineError::NotFound(id.clone()));
    }
    assert_eq!(engine.store().len(), 3);
    assert_eq!(engine.get(&keep_a).expect("a").importance, 50);
    assert_eq!(engine.get(&keep_b).expect("b").importance, 50);
    assert_eq!(
        engine.store().children_of(&root).expect("children"),
        &[keep_a, keep_b]
    );
}

#[test]
fn deleting_an_only_child_leaves_an_empty_sequence() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let milestone = add(&mut engine, &root, "M");
    let subgoal = add(&mut engine, &milestone, "S");

    engine.delete_node(&subgoal).expect("delete");
    let node = engine.get(&milestone).expect("milestone");
    assert!(node.children.is_empty());
    assert_eq!(node.importance, 100);
    assert_eq!(engine.store().importance_total(&milestone).expect("total"), 0);
}

#[test]
fn root_and_unknown_deletions_are_rejected() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    add(&mut engine, &root, "M");
    let revision = engine.revision();

    assert!(matches!(
        engine.delete_node(&root).unwrap_err(),
        EngineError::InvalidOperation(_)
    ));
    let missing = NodeId::try_new("SG-777").expect("id");
    assert_eq!(
        engine.delete_node(&missing).unwrap_err(),
        EngineError::NotFound(missing)
    );
    assert_eq!(engine.revision(), revision);
    assert_eq!(engine.store().len(), 2);
}

#[test]
fn reorder_requires_a_permutation() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let a = add(&mut engine, &root, "A");
    let b = add(&mut engine, &root, "B");
    let c = add(&mut engine, &root, "C");
    let stranger = add(&mut engine, &a, "Stranger");
    let revision = engine.revision();

    let rejected: [Vec<NodeId>; 4] = [
        vec![a.clone(), b.clone()],
        vec![a.clone(), b.clone(), c.clone(), c.clone()],
        vec![a.clone(), a.clone(), b.clone()],
        vec![a.clone(), b.clone(), stranger],
    ];
    for order in &rejected {
        assert!(matches!(
            engine.reorder_siblings(&root, order).unwrap_err(),
            EngineError::InvalidOperation(_)
        ));
    }
    assert_eq!(engine.revision(), revision);

    let result = engine
        .reorder_siblings(&root, &[c.clone(), a.clone(), b.clone()])
        .expect("reorder");
    let order: Vec<&str> = result.tree.children.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(order, vec![c.as_str(), a.as_str(), b.as_str()]);
    // Reordering keeps each node's importance.
    assert_eq!(engine.get(&c).expect("c").importance, 34);
}

#[test]
fn move_node_rejects_an_index_past_the_end() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let a = add(&mut engine, &root, "A");
    let b = add(&mut engine, &root, "B");
    let c = add(&mut engine, &root, "C");

    let err = engine.move_node(&a, 3).unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfRange {
            what: "sibling index",
            value: 3,
            max: 2,
        }
    );

    engine.move_node(&a, 2).expect("move to end");
    assert_eq!(
        engine.store().children_of(&root).expect("children"),
        &[b, c, a.clone()]
    );
    assert!(matches!(
        engine.move_node(&root, 0).unwrap_err(),
        EngineError::InvalidOperation(_)
    ));
}

#[test]
fn titles_are_trimmed_and_must_not_be_blank() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    assert!(matches!(
        engine.add_node(AddNodeRequest::new(&root, "   ")).unwrap_err(),
        EngineError::InvalidOperation(_)
    ));
    assert!(GoalEngine::new("").is_err());

    let milestone = add(&mut engine, &root, "Draft");
    engine.set_title(&milestone, "  Final cut ").expect("rename");
    assert_eq!(engine.get(&milestone).expect("m").title, "Final cut");
    assert!(engine.set_title(&milestone, "\t").is_err());
    assert_eq!(engine.get(&milestone).expect("m").title, "Final cut");
}

#[test]
fn caller_supplied_ids_are_validated() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let milestone = add(&mut engine, &root, "M");

    assert_eq!(engine.node_id(" MS-001 ").expect("known id"), milestone);
    assert_eq!(
        engine.node_id("MS 001").unwrap_err(),
        EngineError::InvalidId(NodeIdError::InvalidChar { ch: ' ', index: 2 })
    );
    assert_eq!(
        engine.node_id("").unwrap_err(),
        EngineError::InvalidId(NodeIdError::Empty)
    );
    assert!(matches!(
        engine.node_id("MS-404").unwrap_err(),
        EngineError::NotFound(_)
    ));
}

#[test]
fn subtree_and_ancestor_queries_walk_the_tree() {
    let mut engine = GoalEngine::new("Quest").expect("engine");
    let root = engine.root_id().clone();
    let milestone = add(&mut engine, &root, "M");
    let s1 = add(&mut engine, &milestone, "S1");
    let t1 = add(&mut engine, &s1, "T1");
    let s2 = add(&mut engine, &milestone, "S2");

    let store = engine.store();
    assert_eq!(
        store.subtree_ids(&milestone).expect("subtree"),
        vec![milestone.clone(), s1.clone(), t1.clone(), s2.clone()]
    );
    assert_eq!(
        store.ancestors(&t1).expect("ancestors"),
        vec![t1.clone(), s1.clone(), milestone.clone(), root.clone()]
    );
    assert_eq!(store.index_in_parent(&s2).expect("index"), 1);
    assert_eq!(store.parent_of(&t1).expect("parent"), s1);
}
