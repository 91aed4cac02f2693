//! Transition resolution shared by the zone processors.
//!
//! For a queried year `Y`, every era of the zone that overlaps the local
//! window `[Y-1-01-01, Y+2-01-01)` contributes:
//!
//! - one transition at the start of the era carrying the offset in effect
//!   at that moment, or at the start of the window for eras that began
//!   earlier,
//! - for eras following a policy, one transition per rule firing inside the
//!   window.
//!
//! The resulting transitions are stored, strictly ordered by their start
//! instant, in a fixed-capacity buffer that is only rebuilt when the
//! queried year changes.

use core::fmt::Write;

use heapless::Vec;
use tinystr::TinyAsciiStr;
use zonedb::{AbbreviationFormat, EraRule, ZoneEra, ZoneInfo, ZonePolicy, ZoneRule};

use crate::{
    components::{LocalDate, LocalDateTime, OffsetDateTime, TimeOffset},
    options::Disambiguation,
    processor::OffsetInfo,
    utils, TimeError, TimeResult, TimeUnwrap,
};

/// Maximum length of a time zone abbreviation.
pub const ABBREVIATION_CAPACITY: usize = 8;

/// A time zone abbreviation such as `PDT` or `+0545`.
pub type Abbreviation = TinyAsciiStr<ABBREVIATION_CAPACITY>;

/// Upper bound on the rounds used to settle wall clock rule times.
const MAX_FIXED_POINT_ITERATIONS: usize = 4;

const ABBREVIATION_OVERFLOW: TimeError =
    TimeError::unsupported().with_message("abbreviation does not fit in its buffer.");

const CAPACITY_EXCEEDED: TimeError =
    TimeError::unsupported().with_message("too many transitions for the processor buffer.");

/// The set of rule shapes a processor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleCoverage {
    /// Single character letters and at most one rule firing per month.
    Basic,
    /// Every rule shape.
    Extended,
}

/// An instant at which the offset of a zone changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    start_epoch_seconds: i64,
    offset_minutes: i32,
    delta_minutes: i32,
    abbreviation: Abbreviation,
    era_index: usize,
}

impl Transition {
    /// The first instant of this transition. `i64::MIN` for the transition
    /// opening the first era of a zone.
    #[inline]
    #[must_use]
    pub const fn start_epoch_seconds(&self) -> i64 {
        self.start_epoch_seconds
    }

    /// Total offset from UTC in minutes, standard offset plus delta.
    #[inline]
    #[must_use]
    pub const fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Daylight saving delta in minutes.
    #[inline]
    #[must_use]
    pub const fn delta_minutes(&self) -> i32 {
        self.delta_minutes
    }

    #[inline]
    #[must_use]
    pub const fn is_dst(&self) -> bool {
        self.delta_minutes != 0
    }

    #[inline]
    #[must_use]
    pub const fn abbreviation(&self) -> Abbreviation {
        self.abbreviation
    }

    /// Index of the era that produced this transition.
    #[inline]
    #[must_use]
    pub const fn era_index(&self) -> usize {
        self.era_index
    }

    const fn offset_seconds(&self) -> i64 {
        self.offset_minutes as i64 * 60
    }

    fn offset_info(&self) -> TimeResult<OffsetInfo> {
        Ok(OffsetInfo {
            utc_offset: TimeOffset::from_minutes(self.offset_minutes)?,
            delta_offset: TimeOffset::from_minutes(self.delta_minutes)?,
            abbreviation: self.abbreviation,
            transition_epoch_seconds: (self.start_epoch_seconds != i64::MIN)
                .then_some(self.start_epoch_seconds),
        })
    }
}

/// The transitions of one zone around the most recently queried year.
#[derive(Debug)]
pub(crate) struct TransitionCache<const N: usize> {
    zone_info: Option<&'static ZoneInfo>,
    year: Option<i32>,
    transitions: Vec<Transition, N>,
}

impl<const N: usize> TransitionCache<N> {
    pub(crate) const fn new() -> Self {
        Self {
            zone_info: None,
            year: None,
            transitions: Vec::new(),
        }
    }

    pub(crate) const fn zone_info(&self) -> Option<&'static ZoneInfo> {
        self.zone_info
    }

    /// Binds the cache to `zone_info`, discarding any computed transitions.
    pub(crate) fn bind(&mut self, zone_info: &'static ZoneInfo) {
        self.zone_info = Some(zone_info);
        self.invalidate();
    }

    pub(crate) fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    fn invalidate(&mut self) {
        self.year = None;
        self.transitions.clear();
    }

    /// Ensures the buffer holds the transitions around `year`.
    pub(crate) fn init_for_year(&mut self, year: i32, coverage: RuleCoverage) -> TimeResult<()> {
        if self.year == Some(year) {
            return Ok(());
        }
        let zone_info = self
            .zone_info
            .ok_or(TimeError::general("zone processor is not bound to a zone."))?;
        self.invalidate();
        if !(LocalDate::MIN_YEAR..=LocalDate::MAX_YEAR).contains(&year) {
            return Err(TimeError::range().with_message("year out of range."));
        }

        log::trace!("computing {} transitions for {year}", zone_info.name);
        let result = build_transitions(zone_info, year, coverage, &mut self.transitions);
        if let Err(err) = result {
            self.transitions.clear();
            return Err(err);
        }
        self.year = Some(year);
        Ok(())
    }

    fn find(&self, epoch_seconds: i64) -> TimeResult<&Transition> {
        let index = self
            .transitions
            .partition_point(|t| t.start_epoch_seconds <= epoch_seconds);
        index
            .checked_sub(1)
            .and_then(|i| self.transitions.get(i))
            .temporal_unwrap()
    }

    pub(crate) fn offset_info(
        &mut self,
        epoch_seconds: i64,
        coverage: RuleCoverage,
    ) -> TimeResult<OffsetInfo> {
        let year = utils::utc_year_for_epoch_seconds(epoch_seconds)?;
        self.init_for_year(year, coverage)?;
        self.find(epoch_seconds)?.offset_info()
    }

    /// Resolves a wall clock time to an instant.
    ///
    /// Transition `i` covers the local interval
    /// `[start_i + offset_i, start_{i+1} + offset_i)`. A local time covered
    /// twice sits in a fall-back overlap, a local time covered by no
    /// interval sits in a spring-forward gap.
    pub(crate) fn offset_date_time(
        &mut self,
        datetime: &LocalDateTime,
        disambiguation: Disambiguation,
        coverage: RuleCoverage,
    ) -> TimeResult<OffsetDateTime> {
        self.init_for_year(datetime.year(), coverage)?;
        let local = datetime.to_epoch_seconds();

        let mut matches = (None, None);
        for (index, transition) in self.transitions.iter().enumerate() {
            let candidate = local - transition.offset_seconds();
            let end = self
                .transitions
                .get(index + 1)
                .map_or(i64::MAX, |next| next.start_epoch_seconds);
            if transition.start_epoch_seconds <= candidate && candidate < end {
                matches = match matches {
                    (None, _) => (Some(candidate), Some(candidate)),
                    (first, _) => (first, Some(candidate)),
                };
            }
        }

        let epoch_seconds = match matches {
            (Some(earlier), Some(later)) if earlier != later => match disambiguation {
                Disambiguation::Compatible | Disambiguation::Earlier => earlier,
                Disambiguation::Later => later,
                Disambiguation::Reject => {
                    return Err(TimeError::range()
                        .with_message("local time is ambiguous in a fall-back overlap."))
                }
            },
            (Some(unique), _) => unique,
            _ => self.resolve_gap(local, disambiguation)?,
        };

        let offset = TimeOffset::from_minutes(self.find(epoch_seconds)?.offset_minutes)?;
        OffsetDateTime::for_epoch_seconds(epoch_seconds, offset)
    }

    fn resolve_gap(&self, local: i64, disambiguation: Disambiguation) -> TimeResult<i64> {
        let (before, after) = self
            .transitions
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .find(|(before, after)| {
                local - before.offset_seconds() >= after.start_epoch_seconds
                    && local - after.offset_seconds() < after.start_epoch_seconds
            })
            .temporal_unwrap()?;
        match disambiguation {
            // The wall clock moves forward by the length of the gap.
            Disambiguation::Compatible | Disambiguation::Later => {
                Ok(local - before.offset_seconds())
            }
            Disambiguation::Earlier => Ok(local - after.offset_seconds()),
            Disambiguation::Reject => Err(TimeError::range()
                .with_message("local time does not exist in a spring-forward gap.")),
        }
    }
}

// ==== Transition generation ====

/// A rule firing at a local time in a given year.
#[derive(Debug, Clone, Copy)]
struct Firing {
    rule: &'static ZoneRule,
    year: i32,
    local: i64,
}

/// A rule firing inside the window whose universal instant is being
/// resolved.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    firing: Firing,
    utc: i64,
    save_before: i64,
}

fn rule_local_seconds(rule: &ZoneRule, year: i32) -> i64 {
    utils::epoch_seconds_for_epoch_days(rule.epoch_days_for_year(year)) + rule.at_time_seconds()
}

fn year_of_local(local: i64) -> TimeResult<i32> {
    utils::utc_year_for_epoch_seconds(local)
}

/// Finds the latest rule of `policy` that fired at or before the local
/// instant `limit`.
///
/// Rule times in different reference frames are compared as local times,
/// which is exact as long as two rules do not fire within a few hours of
/// each other.
fn latest_firing(policy: &ZonePolicy, limit: i64) -> TimeResult<Option<Firing>> {
    let year = year_of_local(limit)?;
    let latest = policy
        .rules
        .iter()
        .filter_map(|rule| {
            let this_year = rule
                .is_active_in(year)
                .then(|| rule_local_seconds(rule, year))
                .filter(|local| *local <= limit)
                .map(|local| Firing { rule, year, local });
            this_year.or_else(|| {
                rule.last_year_before(year).map(|year| Firing {
                    rule,
                    year,
                    local: rule_local_seconds(rule, year),
                })
            })
        })
        .max_by_key(|firing| firing.local);
    Ok(latest)
}

/// Builds the transitions of `zone_info` around `year` into `out`.
fn build_transitions<const N: usize>(
    zone_info: &'static ZoneInfo,
    year: i32,
    coverage: RuleCoverage,
    out: &mut Vec<Transition, N>,
) -> TimeResult<()> {
    let window_start = utils::epoch_seconds_for_year(year - 1);
    let window_end = utils::epoch_seconds_for_year(year + 2);

    let mut era_start_local = i64::MIN;
    let mut era_start_utc = i64::MIN;
    for (era_index, era) in zone_info.eras.iter().enumerate() {
        if era_start_local >= window_end {
            break;
        }
        let era_until_local = if era.until.is_max() {
            i64::MAX
        } else {
            era.until.as_local_seconds()
        };
        let era_until_utc = if era_until_local > window_start {
            let bounds = EraBounds {
                index: era_index,
                start_local: era_start_local,
                start_utc: era_start_utc,
                until_local: era_until_local,
            };
            build_era(era, &bounds, year, window_start, coverage, out)?
        } else {
            era_until_before_window(era, era_until_local)?
        };
        era_start_local = era_until_local;
        era_start_utc = era_until_utc;
    }

    if !out
        .windows(2)
        .all(|pair| pair[0].start_epoch_seconds < pair[1].start_epoch_seconds)
    {
        log::warn!("{} transitions for {year} are not strictly ordered", zone_info.name);
        return Err(TimeError::assert());
    }
    Ok(())
}

struct EraBounds {
    index: usize,
    start_local: i64,
    start_utc: i64,
    until_local: i64,
}

/// The universal end of an era lying entirely before the window.
fn era_until_before_window(era: &ZoneEra, until_local: i64) -> TimeResult<i64> {
    let save = match era.rule {
        EraRule::Fixed(code) => i64::from(code) * i64::from(zonedb::MINUTES_PER_CODE) * 60,
        EraRule::Policy(policy) => {
            latest_firing(policy, until_local - 1)?.map_or(0, |f| f.rule.delta_seconds())
        }
    };
    Ok(era.until.as_precise_ut_time(era.offset_seconds(), save))
}

/// Pushes the transitions of one era and returns the universal instant at
/// which the era ends.
fn build_era<const N: usize>(
    era: &ZoneEra,
    bounds: &EraBounds,
    year: i32,
    window_start: i64,
    coverage: RuleCoverage,
    out: &mut Vec<Transition, N>,
) -> TimeResult<i64> {
    let std_offset = era.offset_seconds();
    let std_minutes = era.offset_minutes();

    let policy = match era.rule {
        EraRule::Fixed(code) => {
            let delta_minutes = i32::from(code) * zonedb::MINUTES_PER_CODE;
            let transition = Transition {
                start_epoch_seconds: bounds.start_utc,
                offset_minutes: std_minutes + delta_minutes,
                delta_minutes,
                abbreviation: format_abbreviation(
                    era.format,
                    "",
                    delta_minutes,
                    std_minutes + delta_minutes,
                )?,
                era_index: bounds.index,
            };
            push_transition(out, transition)?;
            return Ok(era
                .until
                .as_precise_ut_time(std_offset, i64::from(delta_minutes) * 60));
        }
        EraRule::Policy(policy) => policy,
    };

    // The rule in effect when the era, or the window, begins.
    let anchor = bounds.start_local.max(window_start);
    let (initial_save, initial_letter, initial_start) = match latest_firing(policy, anchor)? {
        Some(prior) => {
            let save_before = latest_firing(policy, prior.local - 1)?
                .map_or(0, |firing| firing.rule.delta_seconds());
            let utc = prior
                .rule
                .transition_epoch_seconds(prior.year, std_offset, save_before);
            (
                prior.rule.delta_seconds(),
                prior.rule.letter,
                utc.max(bounds.start_utc),
            )
        }
        None => (
            0,
            policy.first_standard_rule().map_or("", |rule| rule.letter),
            bounds.start_utc,
        ),
    };

    let mut candidates: Vec<Candidate, N> = Vec::new();
    for rule_year in (year - 1)..=(year + 1) {
        for rule in policy.rules_for_year(rule_year) {
            let local = rule_local_seconds(rule, rule_year);
            if local <= anchor || local >= bounds.until_local {
                continue;
            }
            let firing = Firing {
                rule,
                year: rule_year,
                local,
            };
            candidates
                .push(Candidate {
                    firing,
                    utc: 0,
                    save_before: 0,
                })
                .map_err(|_| CAPACITY_EXCEEDED)?;
        }
    }
    resolve_fixed_point(&mut candidates, std_offset, initial_save)?;

    let until_save = candidates
        .iter()
        .rev()
        .find(|c| c.firing.local < bounds.until_local)
        .map_or(initial_save, |c| c.firing.rule.delta_seconds());
    let until_utc = era.until.as_precise_ut_time(std_offset, until_save);

    let in_era = |c: &&Candidate| bounds.start_utc < c.utc && c.utc < until_utc;
    if coverage == RuleCoverage::Basic {
        check_basic_coverage(initial_letter, candidates.iter().filter(in_era), year)?;
    }

    if initial_start < until_utc {
        let delta_minutes = (initial_save / 60) as i32;
        push_transition(
            out,
            Transition {
                start_epoch_seconds: initial_start,
                offset_minutes: std_minutes + delta_minutes,
                delta_minutes,
                abbreviation: format_abbreviation(
                    era.format,
                    initial_letter,
                    delta_minutes,
                    std_minutes + delta_minutes,
                )?,
                era_index: bounds.index,
            },
        )?;
    }
    for candidate in candidates.iter().filter(in_era) {
        let rule = candidate.firing.rule;
        let delta_minutes = rule.delta_minutes();
        push_transition(
            out,
            Transition {
                start_epoch_seconds: candidate.utc,
                offset_minutes: std_minutes + delta_minutes,
                delta_minutes,
                abbreviation: format_abbreviation(
                    era.format,
                    rule.letter,
                    delta_minutes,
                    std_minutes + delta_minutes,
                )?,
                era_index: bounds.index,
            },
        )?;
    }
    Ok(until_utc)
}

/// Settles the universal instants of `candidates`.
///
/// A wall clock rule time depends on the delta of the rule before it, which
/// depends on the order of the instants. Starting from standard time, the
/// instants are computed, sorted and the preceding deltas reassigned until
/// nothing changes.
fn resolve_fixed_point(
    candidates: &mut [Candidate],
    std_offset: i64,
    initial_save: i64,
) -> TimeResult<()> {
    for _ in 0..MAX_FIXED_POINT_ITERATIONS {
        for candidate in candidates.iter_mut() {
            let Firing { rule, year, .. } = candidate.firing;
            candidate.utc = rule.transition_epoch_seconds(year, std_offset, candidate.save_before);
        }
        candidates.sort_unstable_by_key(|c| c.utc);

        let mut changed = false;
        let mut save = initial_save;
        for candidate in candidates.iter_mut() {
            if candidate.save_before != save {
                candidate.save_before = save;
                changed = true;
            }
            save = candidate.firing.rule.delta_seconds();
        }
        if !changed {
            return Ok(());
        }
    }
    log::warn!("rule transition times did not converge");
    Err(TimeError::unsupported().with_message("rule transition times did not converge."))
}

fn check_basic_coverage<'a>(
    initial_letter: &str,
    candidates: impl Iterator<Item = &'a Candidate>,
    year: i32,
) -> TimeResult<()> {
    if initial_letter.len() > 1 {
        log::warn!("rule letter {initial_letter} is too long for the basic processor");
        return Err(TimeError::unsupported().with_message("rule letter longer than one character."));
    }
    let mut months_seen = 0u16;
    for candidate in candidates {
        let rule = candidate.firing.rule;
        if rule.letter.len() > 1 {
            log::warn!("rule letter {} is too long for the basic processor", rule.letter);
            return Err(
                TimeError::unsupported().with_message("rule letter longer than one character.")
            );
        }
        if candidate.firing.year != year {
            continue;
        }
        let bit = 1u16 << rule.in_month;
        if months_seen & bit != 0 {
            log::warn!("two transitions in {year}-{:02} for the basic processor", rule.in_month);
            return Err(TimeError::unsupported()
                .with_message("more than one transition in the same month."));
        }
        months_seen |= bit;
    }
    Ok(())
}

/// Appends a transition, collapsing a transition starting at the same
/// instant as the previous one into the later record.
fn push_transition<const N: usize>(
    out: &mut Vec<Transition, N>,
    transition: Transition,
) -> TimeResult<()> {
    if let Some(last) = out.last_mut() {
        if last.start_epoch_seconds == transition.start_epoch_seconds {
            *last = transition;
            return Ok(());
        }
    }
    out.push(transition).map_err(|_| CAPACITY_EXCEEDED)
}

/// Builds the abbreviation of a transition from its era's format.
pub(crate) fn format_abbreviation(
    format: AbbreviationFormat,
    letter: &str,
    delta_minutes: i32,
    offset_minutes: i32,
) -> TimeResult<Abbreviation> {
    let mut buffer = heapless::String::<ABBREVIATION_CAPACITY>::new();
    match format {
        AbbreviationFormat::Literal(literal) => {
            buffer.push_str(literal).map_err(|()| ABBREVIATION_OVERFLOW)?;
        }
        AbbreviationFormat::Formattable(template) => {
            let (head, tail) = template.split_once("%s").unwrap_or((template, ""));
            buffer.push_str(head).map_err(|()| ABBREVIATION_OVERFLOW)?;
            buffer.push_str(letter).map_err(|()| ABBREVIATION_OVERFLOW)?;
            buffer.push_str(tail).map_err(|()| ABBREVIATION_OVERFLOW)?;
        }
        AbbreviationFormat::Pair(std, dst) => {
            let abbreviation = if delta_minutes != 0 { dst } else { std };
            buffer.push_str(abbreviation).map_err(|()| ABBREVIATION_OVERFLOW)?;
        }
        AbbreviationFormat::Numeric => {
            let sign = if offset_minutes < 0 { '-' } else { '+' };
            let minutes = offset_minutes.abs();
            write!(buffer, "{sign}{:02}", minutes / 60).map_err(|_| ABBREVIATION_OVERFLOW)?;
            if minutes % 60 != 0 {
                write!(buffer, "{:02}", minutes % 60).map_err(|_| ABBREVIATION_OVERFLOW)?;
            }
        }
    }
    Abbreviation::try_from_str(&buffer)
        .map_err(|_| TimeError::unsupported().with_message("abbreviation is not ASCII."))
}

#[cfg(test)]
mod tests {
    use zonedb::{policies, AbbreviationFormat};

    use super::{format_abbreviation, latest_firing, TransitionCache};
    use crate::{processor::transition::RuleCoverage, utils};

    #[test]
    fn abbreviation_formats() {
        let abbr = format_abbreviation(AbbreviationFormat::Formattable("P%sT"), "D", 60, -420);
        assert_eq!(abbr.unwrap().as_str(), "PDT");
        let abbr = format_abbreviation(AbbreviationFormat::Pair("GMT", "BST"), "S", 60, 60);
        assert_eq!(abbr.unwrap().as_str(), "BST");
        let abbr = format_abbreviation(AbbreviationFormat::Numeric, "", 0, 345);
        assert_eq!(abbr.unwrap().as_str(), "+0545");
        let abbr = format_abbreviation(AbbreviationFormat::Numeric, "", 0, -180);
        assert_eq!(abbr.unwrap().as_str(), "-03");
        let abbr = format_abbreviation(AbbreviationFormat::Formattable("%s"), "WAT", -60, 60);
        assert_eq!(abbr.unwrap().as_str(), "WAT");
        let too_long =
            format_abbreviation(AbbreviationFormat::Formattable("ABCDEF%sT"), "XYZ", 60, 60);
        assert!(too_long.is_err());
    }

    #[test]
    fn latest_rule_firing() {
        let limit = utils::epoch_seconds_for_year(2024);
        let firing = latest_firing(&policies::US, limit).unwrap().unwrap();
        assert_eq!((firing.year, firing.rule.in_month), (2023, 11));
        let firing = latest_firing(&policies::US, utils::epoch_seconds_for_year(1960)).unwrap();
        assert!(firing.is_none());
    }

    #[test]
    fn los_angeles_window() {
        let mut cache = TransitionCache::<12>::new();
        cache.bind(&zonedb::zones::AMERICA_LOS_ANGELES);
        cache.init_for_year(2024, RuleCoverage::Basic).unwrap();
        let starts: std::vec::Vec<i64> = cache
            .transitions()
            .iter()
            .map(|t| t.start_epoch_seconds())
            .collect();
        // 2022-11-06, then two transitions per year for 2023 through 2025.
        assert_eq!(starts.len(), 7);
        assert_eq!(starts[0], 1_667_725_200);
        assert!(starts.contains(&1_710_064_800));
        assert!(starts.contains(&1_730_624_400));
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }
}
