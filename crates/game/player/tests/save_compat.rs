//! Loading saves from older versions and round-tripping current ones.
mod common;

use common::kanto;
use game_player::{
    Badge, OakItem, PlayerConfig, PlayerSnapshot, PlayerState, Pokeball, Region, SortOption,
    Starter,
};
use serde_json::json;

#[test]
fn legacy_underscore_save_loads() {
    let world = kanto();
    let legacy = json!({
        "_money": 1250,
        "_dungeonTokens": 40,
        "_route": 3,
        "_caughtPokemonList": [
            {"name": "Bulbasaur", "evolved": false, "attackBonus": 2, "exp": 1000},
            {"name": "Pidgey", "exp": 64.75},
        ],
        "_caughtShinyList": ["Pidgey"],
        "_routeKills": [0, 10, 12, 4],
        "_routeKillsNeeded": 10,
        "_region": 0,
        "_gymBadges": [0, 1],
        "_pokeballs": [900, 20, 3, 1],
        "_notCaughtBallSelection": 1,
        "_alreadyCaughtBallSelection": 0,
        "_sortOption": 3,
        "_sortDescending": true,
        "_starter": 0,
    });

    let state =
        PlayerState::from_json(&legacy.to_string(), PlayerConfig::default(), &world.env()).unwrap();

    assert_eq!(state.money(), 1250);
    assert_eq!(state.dungeon_tokens(), 40);
    assert_eq!(state.route(), 3);
    assert_eq!(state.region(), Region::Kanto);
    assert_eq!(state.starter(), Starter::Bulbasaur);
    assert_eq!(state.caught_pokemon().len(), 2);
    assert_eq!(state.caught_pokemon()[0].level(), 10);
    assert_eq!(state.caught_pokemon()[0].attack_bonus, 2);
    assert_eq!(state.caught_pokemon()[1].exp(), 64);
    assert!(state.already_caught_shiny("Pidgey"));
    assert_eq!(state.route_kills(2), Some(12));
    assert_eq!(state.route_kills(4), Some(0));
    assert!(state.has_badge(Badge::Boulder));
    assert!(!state.has_badge(Badge::Cascade));
    assert_eq!(state.pokeball_count(Pokeball::Masterball), 1);
    assert_eq!(state.not_caught_ball_selection(), Pokeball::Greatball);
    assert_eq!(state.sort_option(), SortOption::Level);
    assert!(state.sort_descending());
}

#[test]
fn current_save_round_trips() {
    let world = kanto();
    let env = world.env();
    let mut state = world.new_game();

    state.gain_money(500, &env);
    state.capture_pokemon("Charmander", false, &env);
    state.capture_pokemon("Pikachu", true, &env);
    state.add_route_kill().unwrap();
    state.gain_badge(Badge::Boulder);
    state.use_pokeball(Pokeball::Pokeball);
    state.set_starter(Starter::Charmander);
    state.set_sort_option(SortOption::Attack);
    state.set_region(Region::Johto);
    state.gain_exp(50, 5, false, &env);

    let saved = state.to_json().unwrap();
    let restored = PlayerState::from_json(&saved, PlayerConfig::default(), &env).unwrap();

    assert_eq!(restored.to_snapshot(), state.to_snapshot());
    assert_eq!(restored.caught_pokemon(), state.caught_pokemon());
    assert_eq!(restored.pokeball_count(Pokeball::Pokeball), 999);
    assert!(!restored.is_fresh());
}

#[test]
fn runtime_fields_reset_on_reload() {
    let world = kanto();
    let mut state = world.new_game();
    state.set_town(game_player::TownRef::new("Pewter City"));
    state.gain_oak_item_exp(OakItem::ExpShare, 30).unwrap();
    state.set_oak_items_equipped(vec![OakItem::ExpShare]);

    let restored =
        PlayerState::from_json(&state.to_json().unwrap(), PlayerConfig::default(), &world.env())
            .unwrap();

    assert_eq!(restored.town().name(), "Pallet Town");
    assert_eq!(restored.oak_item_exp(OakItem::ExpShare), Some(0));
    assert!(restored.oak_items_equipped().is_empty());
}

#[test]
fn garbage_fields_fall_back_individually() {
    let world = kanto();
    let snapshot = PlayerSnapshot::from_value(json!({
        "money": -5,
        "route": "three",
        "caughtPokemonList": [{"exp": 4}, "Pidgey", {"name": "Rattata"}],
        "gymBadges": {"boulder": true},
        "pokeballs": "many",
        "starter": 2,
    }));
    let state = PlayerState::restore(snapshot, PlayerConfig::default(), &world.env());

    assert_eq!(state.money(), 0);
    assert_eq!(state.route(), 1);
    assert_eq!(state.caught_pokemon().len(), 1);
    assert!(state.already_caught("Rattata"));
    assert_eq!(state.gym_badges(), [Badge::None]);
    assert_eq!(state.pokeball_count(Pokeball::Ultraball), 1000);
    assert_eq!(state.starter(), Starter::Squirtle);
}

#[test]
fn non_object_json_restores_defaults() {
    let world = kanto();
    for text in ["[]", "42", "\"save\""] {
        let state = PlayerState::from_json(text, PlayerConfig::default(), &world.env()).unwrap();
        assert!(!state.is_fresh(), "{text}");
        assert_eq!(state.money(), 0);
        assert_eq!(state.route(), 1);
    }
}

#[test]
fn mixed_legacy_and_current_keys_keep_progress() {
    let world = kanto();
    let mixed = json!({
        "money": 500,
        "_money": 500,
        "_caughtPokemonList": [{"name": "Pidgey", "exp": 27}],
        "caughtPokemonList": [{"name": "Pidgey", "exp": 125}],
        "gymBadges": [0, 1, 2],
        "_pokeballs": [5, 6, 7, 8],
    });

    let state =
        PlayerState::from_json(&mixed.to_string(), PlayerConfig::default(), &world.env()).unwrap();

    assert_eq!(state.money(), 500);
    assert_eq!(state.caught_pokemon().len(), 1);
    assert_eq!(state.caught_pokemon()[0].level(), 5);
    assert!(state.has_badge(Badge::Cascade));
    assert_eq!(state.pokeball_count(Pokeball::Masterball), 8);
}
