use modelgen_core::{load_model, EntityModel};
use modelgen_emit::{ClassModel, EmitError, Instance, ScalarValue};

fn league_model() -> EntityModel {
    let json = r#"{
        "model_version": "0.1",
        "name": "soccer",
        "entities": [
            { "name": "Person",
              "attributes": [ { "name": "name", "scalar": "text" } ] },
            { "name": "Player", "parent": "Person" },
            { "name": "Goalkeeper", "parent": "Player" },
            { "name": "Referee", "parent": "Person" },
            { "name": "Season" },
            { "name": "Stadium" },
            { "name": "SoccerTeam",
              "relationships": [
                  { "name": "has", "target": "Player",
                    "cardinality": { "kind": "many" } } ] },
            { "name": "Match",
              "relationships": [
                  { "name": "involves", "target": "SoccerTeam",
                    "cardinality": { "kind": "fixed", "count": 2 } },
                  { "name": "officiatedBy", "target": "Referee",
                    "cardinality": { "kind": "one" } },
                  { "name": "playedAt", "target": "Stadium",
                    "cardinality": { "kind": "one" } } ] },
            { "name": "League",
              "relationships": [
                  { "name": "contains", "target": "SoccerTeam",
                    "cardinality": { "kind": "many" } },
                  { "name": "organizes", "target": "Season",
                    "cardinality": { "kind": "many" } } ] }
        ]
    }"#;
    load_model(json).expect("load model")
}

fn instantiate(model: &EntityModel, entity: &str) -> Instance {
    let entity = model.entity(entity).expect("entity declared");
    ClassModel::build(model, entity)
        .expect("build class")
        .instantiate()
}

#[test]
fn collections_start_empty_and_preserve_append_order() {
    let model = league_model();
    let mut team = instantiate(&model, "SoccerTeam");

    assert!(team.seq("has").expect("has field").is_empty());

    for name in ["Ana", "Bruna", "Carla"] {
        let mut player = instantiate(&model, "Player");
        player
            .set_scalar("name", ScalarValue::Text(name.to_string()))
            .expect("set name");
        team.seq_mut("has").expect("has field").push(player);
    }

    let players = team.seq("has").expect("has field");
    assert_eq!(players.len(), 3);
    let names: Vec<&ScalarValue> = players
        .iter()
        .map(|player| player.scalar("name").expect("name").expect("set"))
        .collect();
    assert_eq!(
        names,
        vec![
            &ScalarValue::Text("Ana".to_string()),
            &ScalarValue::Text("Bruna".to_string()),
            &ScalarValue::Text("Carla".to_string()),
        ]
    );
}

#[test]
fn scalar_links_are_last_write_wins() {
    let model = league_model();
    let mut game = instantiate(&model, "Match");

    assert!(game.link("officiatedBy").expect("officiatedBy field").is_none());

    let mut first = instantiate(&model, "Referee");
    first
        .set_scalar("name", ScalarValue::Text("Denise".to_string()))
        .expect("set name");
    let mut second = instantiate(&model, "Referee");
    second
        .set_scalar("name", ScalarValue::Text("Elisa".to_string()))
        .expect("set name");

    game.set_link("officiatedBy", first).expect("first set");
    game.set_link("officiatedBy", second).expect("second set");

    let current = game
        .link("officiatedBy")
        .expect("officiatedBy field")
        .expect("set");
    assert_eq!(
        current.scalar("name").expect("name").expect("set"),
        &ScalarValue::Text("Elisa".to_string())
    );
}

#[test]
fn fixed_tuples_hold_exactly_the_declared_count() {
    let model = league_model();
    let mut game = instantiate(&model, "Match");

    assert!(game.tuple("involves").expect("involves field").is_none());

    let home = instantiate(&model, "SoccerTeam");
    let away = instantiate(&model, "SoccerTeam");
    game.set_tuple("involves", vec![home.clone(), away.clone()])
        .expect("set both teams");
    assert_eq!(game.tuple("involves").expect("field").expect("set").len(), 2);

    let err = game
        .set_tuple("involves", vec![home, away, instantiate(&model, "SoccerTeam")])
        .expect_err("three teams must be rejected");
    match err {
        EmitError::ArityMismatch {
            expected, actual, ..
        } => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    // a failed set leaves the previous value in place
    assert_eq!(game.tuple("involves").expect("field").expect("set").len(), 2);
}

#[test]
fn league_round_trip_matches_the_demo_scenario() {
    let model = league_model();
    let mut league = instantiate(&model, "League");
    let mut game = instantiate(&model, "Match");

    let home = instantiate(&model, "SoccerTeam");
    let away = instantiate(&model, "SoccerTeam");
    game.set_tuple("involves", vec![home.clone(), away.clone()])
        .expect("set teams");

    league.seq_mut("contains").expect("contains").push(home);
    league.seq_mut("contains").expect("contains").push(away);
    league
        .seq_mut("organizes")
        .expect("organizes")
        .push(instantiate(&model, "Season"));

    assert_eq!(league.seq("contains").expect("contains").len(), 2);
    assert_eq!(league.seq("organizes").expect("organizes").len(), 1);
    assert_eq!(game.tuple("involves").expect("involves").expect("set").len(), 2);
}

#[test]
fn membership_checks_hold_transitively() {
    let model = league_model();

    let goalkeeper = instantiate(&model, "Goalkeeper");
    assert!(goalkeeper.is_instance_of("Goalkeeper"));
    assert!(goalkeeper.is_instance_of("Player"));
    assert!(goalkeeper.is_instance_of("Person"));
    assert!(!goalkeeper.is_instance_of("Referee"));

    let referee = instantiate(&model, "Referee");
    assert!(referee.is_instance_of("Person"));
    assert!(!referee.is_instance_of("Player"));
}

#[test]
fn unknown_fields_are_rejected() {
    let model = league_model();
    let mut stadium = instantiate(&model, "Stadium");

    let err = stadium
        .set_scalar("capacity", ScalarValue::Int(40_000))
        .expect_err("undeclared field");
    assert!(matches!(err, EmitError::UnknownField { field, .. } if field == "capacity"));
}
