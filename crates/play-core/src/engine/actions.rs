//! Acciones por tipo de artefacto.
//!
//! Todas siguen el mismo contrato que `ArtifactEngine::act`: una acción que no
//! aplica (tipo equivocado, id desconocido, ya resuelto, bloqueado) devuelve
//! `None` y no deja rastro.
use chrono::Duration;
use play_domain::config::{CellValue, CheckItem, CheckItemType, GeoCoordinate, HintCost, LogicGridCell,
                          LogicGridConfig};
use play_domain::{ArtifactConfig, Role};
use serde_json::json;
use uuid::Uuid;

use super::{ActionCtx, ArtifactEngine, Outcome};
use crate::answer::{find_match, matches, normalize};
use crate::constants::{CUSTOM_HINT_PREFIX, MARKER_ID_PREFIX, SOUND_LEVEL_MAX};
use crate::event::{ArtifactEvent, EventStore, EventType};
use crate::geo::haversine_meters;
use crate::state::*;

impl<S> ArtifactEngine<S> where S: EventStore<ArtifactEvent>
{
    // ---- keypad ----

    /// Código exacto contra `correctCode`. Con `maxAttempts` el keypad se
    /// bloquea al agotar los intentos.
    pub fn enter_keypad_code(&mut self, scenario_id: &str, code: &str) -> Option<EventType> {
        self.act(scenario_id, |_, config, state| {
                let (ArtifactConfig::Keypad(cfg), RuntimeState::Keypad(s)) = (config, state) else {
                    return None;
                };
                if s.is_solved || s.is_locked {
                    return None;
                }
                if code == cfg.correct_code {
                    s.is_solved = true;
                    return Some((EventType::Solved, json!({ "attemptsUsed": s.attempts_used })));
                }
                s.attempts_used += 1;
                s.is_locked = cfg.max_attempts.is_some_and(|max| s.attempts_used >= max);
                Some((EventType::Failed, json!({ "attemptsUsed": s.attempts_used, "locked": s.is_locked })))
            })
    }

    // ---- riddle ----

    pub fn submit_riddle_answer(&mut self, scenario_id: &str, answer: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::Riddle(cfg), RuntimeState::Riddle(s)) = (config, state) else {
                    return None;
                };
                if s.is_correct || cfg.max_attempts.is_some_and(|max| s.attempts_used >= max) {
                    return None;
                }
                let mode = cfg.mode();
                let matched = find_match(answer, &cfg.accepted_answers, mode).cloned();
                let correct = matched.is_some();
                s.attempts_used += 1;
                s.attempts.push(RiddleAttempt { answer: answer.to_string(),
                                                timestamp: ctx.now,
                                                correct,
                                                normalized: Some(normalize(answer, mode)) });
                if cfg.show_hint_after_attempts.is_some_and(|n| s.attempts_used >= n) {
                    s.show_hint = true;
                }
                let payload = json!({ "attemptsUsed": s.attempts_used, "showHint": s.show_hint });
                if correct {
                    s.is_correct = true;
                    s.correct_answer = matched;
                    Some((EventType::Solved, payload))
                } else {
                    Some((EventType::Failed, payload))
                }
            })
    }

    // ---- cipher ----

    pub fn submit_cipher_guess(&mut self, scenario_id: &str, guess: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::Cipher(cfg), RuntimeState::Cipher(s)) = (config, state) else {
                    return None;
                };
                if s.is_decoded {
                    return None;
                }
                s.current_guess = guess.to_string();
                s.attempts_used += 1;
                if matches(guess, &cfg.expected_plaintext, cfg.mode()) {
                    s.is_decoded = true;
                    s.decoded_at = Some(ctx.now);
                    Some((EventType::Solved, json!({ "attemptsUsed": s.attempts_used })))
                } else {
                    Some((EventType::Custom, json!({ "action": "guess", "guessLength": guess.chars().count() })))
                }
            })
    }

    // ---- hotspot ----

    /// Re-encontrar un hotspot es un no-op.
    pub fn find_hotspot(&mut self, scenario_id: &str, hotspot_id: &str) -> Option<EventType> {
        self.act(scenario_id, |_, config, state| {
                let (ArtifactConfig::Hotspot(cfg), RuntimeState::Hotspot(s)) = (config, state) else {
                    return None;
                };
                cfg.zone(hotspot_id)?;
                if s.is_complete || s.found_hotspot_ids.iter().any(|h| h == hotspot_id) {
                    return None;
                }
                s.found_hotspot_ids.push(hotspot_id.to_string());
                s.found_count = s.found_hotspot_ids.len();
                let payload = json!({
                    "hotspotId": hotspot_id,
                    "foundCount": s.found_count,
                    "requiredCount": s.required_count,
                });
                if s.found_count >= s.required_count {
                    s.is_complete = true;
                    Some((EventType::Solved, payload))
                } else {
                    Some((EventType::Revealed, payload))
                }
            })
    }

    // ---- tile puzzle ----

    /// Mueve la ficha a `to` intercambiándola con la que ocupa ese lugar, así
    /// las posiciones siguen siendo una permutación.
    pub fn move_tile(&mut self, scenario_id: &str, tile_id: &str, to: TilePosition) -> Option<EventType> {
        self.act(scenario_id, |ctx, _, state| {
                let RuntimeState::TilePuzzle(s) = state else {
                    return None;
                };
                if s.is_complete || !s.in_grid(to) {
                    return None;
                }
                let moving = s.tiles.iter().position(|t| t.id == tile_id)?;
                let from = s.tiles[moving].current_position;
                if from == to {
                    return None;
                }
                if let Some(other) = s.tiles.iter().position(|t| t.current_position == to) {
                    s.tiles[other].current_position = from;
                }
                s.tiles[moving].current_position = to;
                s.move_count += 1;
                if is_tile_puzzle_solved(&s.tiles) {
                    s.is_complete = true;
                    s.completed_at = Some(ctx.now);
                    return Some((EventType::Solved, json!({ "moveCount": s.move_count })));
                }
                Some((EventType::Custom, json!({ "action": "tile_moved", "tileId": tile_id, "moveCount": s.move_count })))
            })
    }

    // ---- logic grid ----

    /// Reemplaza o agrega la marca de una celda.
    pub fn set_logic_cell(&mut self, scenario_id: &str, cell: LogicGridCell) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::LogicGrid(cfg), RuntimeState::LogicGrid(s)) = (config, state) else {
                    return None;
                };
                mark_cell(ctx, cfg, s, cell)
            })
    }

    /// Avanza la celda en el ciclo unknown -> yes -> no -> unknown.
    pub fn cycle_logic_cell(&mut self,
                            scenario_id: &str,
                            row_category_id: &str,
                            row_item_index: u32,
                            col_category_id: &str,
                            col_item_index: u32)
                            -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::LogicGrid(cfg), RuntimeState::LogicGrid(s)) = (config, state) else {
                    return None;
                };
                let mut cell = LogicGridCell::new(row_category_id,
                                                  row_item_index,
                                                  col_category_id,
                                                  col_item_index,
                                                  CellValue::Unknown);
                let current = s.cells
                               .iter()
                               .find(|c| c.same_position(&cell))
                               .map(|c| c.value)
                               .unwrap_or(CellValue::Unknown);
                cell.value = current.cycled();
                mark_cell(ctx, cfg, s, cell)
            })
    }

    pub fn reveal_clue(&mut self, scenario_id: &str, clue_id: &str) -> Option<EventType> {
        self.act(scenario_id, |_, config, state| {
                let (ArtifactConfig::LogicGrid(cfg), RuntimeState::LogicGrid(s)) = (config, state) else {
                    return None;
                };
                if !cfg.has_clue(clue_id) || s.revealed_clue_ids.iter().any(|c| c == clue_id) {
                    return None;
                }
                s.revealed_clue_ids.push(clue_id.to_string());
                Some((EventType::Revealed, json!({ "clueId": clue_id })))
            })
    }

    // ---- counter ----

    pub fn increment_counter(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, _, state| {
                let RuntimeState::Counter(s) = state else {
                    return None;
                };
                let was_complete = s.is_complete;
                s.current_value = s.current_value.saturating_add(1);
                if let Some(tally) = s.role_values.as_mut() {
                    *tally.entry(ctx.role.to_string()).or_insert(0) += 1;
                }
                s.is_complete = s.current_value >= s.target;
                let payload = json!({ "key": s.key, "currentValue": s.current_value, "target": s.target });
                if s.is_complete && !was_complete {
                    Some((EventType::Solved, payload))
                } else {
                    Some((EventType::StateUpdated, payload))
                }
            })
    }

    /// Sólo con `allowDecrement`; en cero es un no-op.
    pub fn decrement_counter(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::Counter(cfg), RuntimeState::Counter(s)) = (config, state) else {
                    return None;
                };
                if !cfg.allow_decrement.unwrap_or(false) || s.current_value == 0 {
                    return None;
                }
                s.current_value -= 1;
                if let Some(count) = s.role_values.as_mut().and_then(|t| t.get_mut(ctx.role.as_str())) {
                    *count = count.saturating_sub(1);
                }
                s.is_complete = s.current_value >= s.target;
                Some((EventType::StateUpdated, json!({ "key": s.key, "currentValue": s.current_value, "target": s.target })))
            })
    }

    // ---- qr gate ----

    pub fn submit_scan(&mut self, scenario_id: &str, value: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::ScanGate(cfg), RuntimeState::ScanGate(s)) = (config, state) else {
                    return None;
                };
                if s.is_verified {
                    return None;
                }
                s.scan_attempts += 1;
                s.scanned_value = Some(value.trim().to_string());
                if cfg.accepts(value) {
                    s.is_verified = true;
                    s.verified_at = Some(ctx.now);
                    Some((EventType::Solved, json!({ "value": value.trim(), "mode": cfg.mode })))
                } else {
                    Some((EventType::Failed, json!({ "scanAttempts": s.scan_attempts })))
                }
            })
    }

    /// Código manual cuando el escaneo no es posible.
    pub fn submit_fallback_code(&mut self, scenario_id: &str, code: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::ScanGate(cfg), RuntimeState::ScanGate(s)) = (config, state) else {
                    return None;
                };
                if s.is_verified || !cfg.allow_manual_fallback.unwrap_or(false) {
                    return None;
                }
                let expected = cfg.fallback_code.as_deref()?;
                s.scan_attempts += 1;
                if code.trim() == expected {
                    s.is_verified = true;
                    s.used_fallback = true;
                    s.verified_at = Some(ctx.now);
                    Some((EventType::Solved, json!({ "via": "manual_code" })))
                } else {
                    Some((EventType::Failed, json!({ "scanAttempts": s.scan_attempts, "via": "manual_code" })))
                }
            })
    }

    // ---- location check ----

    /// Guarda la posición reportada y, si hay objetivo, la distancia. No
    /// verifica: eso lo decide una confirmación externa.
    pub fn report_location(&mut self, scenario_id: &str, coordinates: GeoCoordinate) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::LocationCheck(cfg), RuntimeState::LocationCheck(s)) = (config, state) else {
                    return None;
                };
                let distance = cfg.target_coordinates
                                  .as_ref()
                                  .map(|target| haversine_meters(&coordinates, target));
                s.current_coordinates = Some(coordinates);
                s.distance_meters = distance;
                s.last_check_at = Some(ctx.now);
                let within = match (distance, cfg.radius_meters) {
                    (Some(d), Some(r)) => Some(d <= r),
                    _ => None,
                };
                Some((EventType::StateUpdated, json!({ "distanceMeters": distance, "withinRadius": within })))
            })
    }

    pub fn confirm_location(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::LocationCheck(cfg), RuntimeState::LocationCheck(s)) = (config, state) else {
                    return None;
                };
                if s.is_verified {
                    return None;
                }
                s.is_verified = true;
                s.verified_at = Some(ctx.now);
                Some((EventType::Solved, json!({ "locationId": cfg.location_id, "checkType": cfg.check_type })))
            })
    }

    pub fn submit_location_qr(&mut self, scenario_id: &str, value: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::LocationCheck(cfg), RuntimeState::LocationCheck(s)) = (config, state) else {
                    return None;
                };
                let expected = cfg.qr_code_value.as_deref()?;
                if s.is_verified {
                    return None;
                }
                s.last_check_at = Some(ctx.now);
                if value.trim() == expected {
                    s.is_verified = true;
                    s.verified_at = Some(ctx.now);
                    Some((EventType::Solved, json!({ "locationId": cfg.location_id, "checkType": "qr" })))
                } else {
                    Some((EventType::Failed, json!({ "locationId": cfg.location_id })))
                }
            })
    }

    // ---- hints ----

    /// Revela una pista configurada. Se rechaza si ya se reveló, si no quedan
    /// pistas, durante el cooldown o antes de `availableAfterSeconds`.
    pub fn reveal_hint(&mut self, scenario_id: &str, hint_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::HintContainer(cfg), RuntimeState::HintContainer(s)) = (config, state) else {
                    return None;
                };
                let hint = cfg.hint(hint_id)?;
                if s.revealed_hint_ids.iter().any(|h| h == hint_id) || s.hints_available == 0 {
                    return None;
                }
                let cooldown = i64::from(cfg.cooldown_seconds.unwrap_or(0));
                if let Some(last) = s.last_hint_time {
                    if ctx.now < last + Duration::seconds(cooldown) {
                        return None;
                    }
                }
                let unlock = i64::from(hint.available_after_seconds.unwrap_or(0));
                if ctx.now < s.started_at + Duration::seconds(unlock) {
                    return None;
                }
                s.revealed_hint_ids.push(hint_id.to_string());
                s.hints_available -= 1;
                s.last_hint_time = Some(ctx.now);
                s.cooldown_remaining = cfg.cooldown_seconds.unwrap_or(0);
                let cost = hint.cost.unwrap_or_default();
                match cost {
                    HintCost::None => {}
                    HintCost::Time => s.total_penalty_time += hint.time_penalty.unwrap_or(0),
                    HintCost::Points => s.total_penalty_points += hint.points_penalty.unwrap_or(0),
                }
                Some((EventType::Revealed,
                      json!({
                          "hintId": hint_id,
                          "cost": cost,
                          "hintsAvailable": s.hints_available,
                          "totalPenaltyTime": s.total_penalty_time,
                          "totalPenaltyPoints": s.total_penalty_points,
                      })))
            })
    }

    /// Pista libre del host. No consume cupo ni respeta cooldown.
    pub fn send_custom_hint(&mut self, scenario_id: &str, content: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, _, state| {
                let RuntimeState::HintContainer(s) = state else {
                    return None;
                };
                if !ctx.role.is_facilitator() || content.trim().is_empty() {
                    return None;
                }
                let sent = s.revealed_hint_ids
                            .iter()
                            .filter(|h| h.starts_with(CUSTOM_HINT_PREFIX))
                            .count();
                let hint_id = format!("{CUSTOM_HINT_PREFIX}{}", sent + 1);
                s.revealed_hint_ids.push(hint_id.clone());
                Some((EventType::Revealed, json!({ "hintId": hint_id, "content": content.trim(), "custom": true })))
            })
    }

    // ---- prop confirmation ----

    pub fn request_prop(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, _, state| {
                let RuntimeState::PropConfirmation(s) = state else {
                    return None;
                };
                if matches!(s.status, PropStatus::Waiting | PropStatus::Confirmed) {
                    return None;
                }
                s.status = PropStatus::Waiting;
                s.requested_at = Some(ctx.now);
                Some((EventType::StateUpdated, json!({ "action": "requested", "status": s.status })))
            })
    }

    pub fn capture_prop_photo(&mut self, scenario_id: &str, url: &str) -> Option<EventType> {
        self.act(scenario_id, |_, _, state| {
                let RuntimeState::PropConfirmation(s) = state else {
                    return None;
                };
                if s.status == PropStatus::Confirmed || url.trim().is_empty() {
                    return None;
                }
                s.photo_url = Some(url.trim().to_string());
                Some((EventType::StateUpdated, json!({ "action": "photo_captured" })))
            })
    }

    /// Con `requirePhoto` se necesita una foto capturada.
    pub fn confirm_prop(&mut self, scenario_id: &str, notes: Option<&str>) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::PropConfirmation(cfg), RuntimeState::PropConfirmation(s)) = (config, state)
                else {
                    return None;
                };
                if s.status == PropStatus::Confirmed {
                    return None;
                }
                if cfg.require_photo.unwrap_or(false) && s.photo_url.is_none() {
                    return None;
                }
                s.status = PropStatus::Confirmed;
                s.confirmed_at = Some(ctx.now);
                s.confirmed_by = Some(ctx.role.to_string());
                s.notes = notes.map(str::to_string);
                Some((EventType::Solved, json!({ "propId": cfg.prop_id, "confirmedBy": ctx.role })))
            })
    }

    pub fn reject_prop(&mut self, scenario_id: &str, notes: Option<&str>) -> Option<EventType> {
        self.act(scenario_id, |_, config, state| {
                let (ArtifactConfig::PropConfirmation(cfg), RuntimeState::PropConfirmation(s)) = (config, state)
                else {
                    return None;
                };
                if s.status != PropStatus::Waiting {
                    return None;
                }
                s.status = PropStatus::Rejected;
                s.notes = notes.map(str::to_string);
                Some((EventType::Failed, json!({ "propId": cfg.prop_id, "status": s.status })))
            })
    }

    /// Vence una solicitud en espera. Con `timeoutSeconds` sólo después de
    /// ese plazo desde `requestedAt`.
    pub fn expire_prop(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::PropConfirmation(cfg), RuntimeState::PropConfirmation(s)) = (config, state)
                else {
                    return None;
                };
                if s.status != PropStatus::Waiting {
                    return None;
                }
                if let (Some(timeout), Some(requested)) = (cfg.timeout_seconds, s.requested_at) {
                    if ctx.now < requested + Duration::seconds(i64::from(timeout)) {
                        return None;
                    }
                }
                s.status = PropStatus::Timeout;
                Some((EventType::Failed, json!({ "propId": cfg.prop_id, "status": s.status })))
            })
    }

    // ---- audio ----

    pub fn acknowledge_audio(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::Audio(cfg), RuntimeState::Audio(s)) = (config, state) else {
                    return None;
                };
                if !cfg.requires_ack() || s.acknowledged {
                    return None;
                }
                s.acknowledged = true;
                s.acknowledged_at = Some(ctx.now);
                Some((EventType::Solved, json!({ "action": "acknowledged" })))
            })
    }

    // ---- sound level ----

    /// Muestra del medidor, recortada a 0..=100. Acumula segundos seguidos
    /// sobre el umbral entre muestras consecutivas.
    pub fn report_sound_level(&mut self, scenario_id: &str, level: i32) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::SoundLevel(cfg), RuntimeState::SoundLevel(s)) = (config, state) else {
                    return None;
                };
                if s.is_triggered {
                    return None;
                }
                let level = level.clamp(0, i32::from(SOUND_LEVEL_MAX)) as u8;
                let above = level >= cfg.threshold_level;
                let was_above = s.current_level >= cfg.threshold_level && s.last_sample_at.is_some();
                s.sustained_seconds = match (above, was_above, s.last_sample_at) {
                    (true, true, Some(prev)) => {
                        s.sustained_seconds + (ctx.now - prev).num_milliseconds().max(0) as f64 / 1000.0
                    }
                    _ => 0.0,
                };
                s.current_level = level;
                s.peak_level = s.peak_level.max(level);
                s.last_sample_at = Some(ctx.now);
                Some((EventType::StateUpdated,
                      json!({
                          "level": level,
                          "peakLevel": s.peak_level,
                          "sustainedSeconds": s.sustained_seconds,
                      })))
            })
    }

    /// Disparo externo del medidor; sólo una vez.
    pub fn trigger_sound_level(&mut self, scenario_id: &str) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::SoundLevel(cfg), RuntimeState::SoundLevel(s)) = (config, state) else {
                    return None;
                };
                if s.is_triggered {
                    return None;
                }
                s.is_triggered = true;
                s.triggered_at = Some(ctx.now);
                Some((EventType::Solved, json!({ "triggerMode": cfg.trigger_mode, "peakLevel": s.peak_level })))
            })
    }

    // ---- replay markers ----

    /// Marcadores ordenados por segundo del timeline.
    pub fn add_replay_marker(&mut self, scenario_id: &str, marker: NewReplayMarker) -> Option<EventType> {
        self.act(scenario_id, |ctx, config, state| {
                let (ArtifactConfig::ReplayMarker(cfg), RuntimeState::ReplayMarker(s)) = (config, state) else {
                    return None;
                };
                if !cfg.available_types.contains(&marker.marker_type)
                   || !marker.timestamp_seconds.is_finite()
                   || marker.timestamp_seconds < 0.0
                {
                    return None;
                }
                if ctx.role == Role::Participant && !cfg.allow_participant_markers.unwrap_or(false) {
                    return None;
                }
                let id = format!("{MARKER_ID_PREFIX}{}", Uuid::new_v4().simple());
                let payload = json!({
                    "markerId": id,
                    "type": marker.marker_type,
                    "timestampSeconds": marker.timestamp_seconds,
                });
                s.markers.push(ReplayMarker { id,
                                              marker_type: marker.marker_type,
                                              timestamp_seconds: marker.timestamp_seconds,
                                              label: marker.label,
                                              note: marker.note,
                                              created_by: Some(ctx.role.to_string()),
                                              created_at: ctx.now });
                s.markers.sort_by(|a, b| a.timestamp_seconds.total_cmp(&b.timestamp_seconds));
                Some((EventType::Revealed, payload))
            })
    }

    pub fn delete_replay_marker(&mut self, scenario_id: &str, marker_id: &str) -> Option<EventType> {
        self.act(scenario_id, |_, _, state| {
                let RuntimeState::ReplayMarker(s) = state else {
                    return None;
                };
                let index = s.markers.iter().position(|m| m.id == marker_id)?;
                s.markers.remove(index);
                Some((EventType::Custom, json!({ "action": "marker_deleted", "markerId": marker_id })))
            })
    }

    // ---- multi answer ----

    /// Registra (o reemplaza) el resultado de un check y recalcula el avance.
    pub fn submit_check(&mut self, scenario_id: &str, check_id: &str, value: CheckAnswer) -> Option<EventType> {
        self.act(scenario_id, |_, config, state| {
                let (ArtifactConfig::MultiAnswer(cfg), RuntimeState::MultiAnswer(s)) = (config, state) else {
                    return None;
                };
                let item = cfg.check_item(check_id)?;
                if s.is_complete {
                    return None;
                }
                let passed = check_passes(item, &value);
                let result = CheckResult { check_id: check_id.to_string(),
                                           value,
                                           passed };
                match s.results.iter_mut().find(|r| r.check_id == check_id) {
                    Some(existing) => *existing = result,
                    None => s.results.push(result),
                }
                s.passed_count = s.results.iter().filter(|r| r.passed).count();
                s.is_complete = if cfg.requires_all() {
                    s.passed_count >= s.total_count
                } else {
                    s.passed_count >= 1
                };
                let payload = json!({ "checkId": check_id, "passed": passed, "passedCount": s.passed_count });
                if s.is_complete {
                    Some((EventType::Solved, payload))
                } else {
                    Some((EventType::StateUpdated, payload))
                }
            })
    }
}

fn mark_cell(ctx: ActionCtx, cfg: &LogicGridConfig, s: &mut LogicGridState, cell: LogicGridCell) -> Outcome {
    if s.is_solved || !cfg.contains_position(&cell) {
        return None;
    }
    match s.cells.iter_mut().find(|c| c.same_position(&cell)) {
        Some(existing) if existing.value == cell.value => return None,
        Some(existing) => existing.value = cell.value,
        None => s.cells.push(cell.clone()),
    }
    s.move_count += 1;
    if is_logic_grid_solved(&s.cells, &cfg.solution) {
        s.is_solved = true;
        s.solved_at = Some(ctx.now);
        return Some((EventType::Solved, json!({ "moveCount": s.move_count })));
    }
    Some((EventType::StateUpdated, json!({ "action": "cell_marked", "cell": cell, "moveCount": s.move_count })))
}

/// text/code comparan contra `expected` (o piden algo no vacío), select
/// compara el valor o la pertenencia a `options`, toggle pasa con `true`.
fn check_passes(item: &CheckItem, value: &CheckAnswer) -> bool {
    match (item.item_type, value) {
        (CheckItemType::Text | CheckItemType::Code, CheckAnswer::Text(answer)) => match &item.expected {
            Some(expected) => matches(answer, expected, item.normalize_mode.unwrap_or_default()),
            None => !answer.trim().is_empty(),
        },
        (CheckItemType::Select, CheckAnswer::Text(choice)) => match &item.expected {
            Some(expected) => choice.trim() == expected,
            None => item.options
                        .as_ref()
                        .is_some_and(|opts| opts.iter().any(|o| o.value == choice.trim())),
        },
        (CheckItemType::Toggle, CheckAnswer::Toggle(on)) => *on,
        _ => false,
    }
}
