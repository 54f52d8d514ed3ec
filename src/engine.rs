// ABOUTME: PlanEngine facade exposing the engine's in-process operations to collaborators
// ABOUTME: Wires reference snapshots, the intake state machine, generators, and assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Engine
//!
//! Entry point for callers. Every operation is synchronous and request
//! scoped; the only shared mutable state is the session store, and every
//! generation call reads a single reference snapshot from start to finish.

use crate::config::PlanningConfig;
use crate::conversation::{
    hint_for, ConversationState, InMemorySessionStore, IntakeConversation, SessionStore,
    TurnOutcome, TurnReply,
};
use crate::intake::{self, RawProfile};
use crate::intelligence::{generate_nutrition_plan, training_recommender};
use crate::reference::{
    CatalogError, ReferenceCatalog, ReferenceDataProvider, SharedReferenceData,
};
use crate::services::{assemble, PlanBundle};
use chrono::Utc;
use fitplan_core::constants::prompts;
use fitplan_core::errors::{PlanError, ValidationError};
use fitplan_core::models::{
    GeneratedNutritionPlan, GeneratedTrainingPlan, Goal, GoalProfile, MealPlan,
    ProfileSnapshot, Recipe, RecipeConstraints, TrainingPlanTemplate, UserProfile,
};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Plan generation engine
pub struct PlanEngine<S: SessionStore = InMemorySessionStore> {
    conversation: IntakeConversation<S>,
    reference: Arc<dyn ReferenceDataProvider>,
    config: PlanningConfig,
}

impl PlanEngine<InMemorySessionStore> {
    /// Engine with an in-memory session store
    #[must_use]
    pub fn new(reference: Arc<dyn ReferenceDataProvider>, config: PlanningConfig) -> Self {
        Self::with_store(InMemorySessionStore::new(), reference, config)
    }

    /// Engine over the built-in catalog and the global configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded catalog is corrupt
    pub fn with_builtin_catalog() -> Result<Self, CatalogError> {
        Ok(Self::new(
            Arc::new(SharedReferenceData::builtin()?),
            PlanningConfig::global().clone(),
        ))
    }

    /// Engine over a fixed catalog
    #[must_use]
    pub fn with_catalog(catalog: ReferenceCatalog, config: PlanningConfig) -> Self {
        Self::new(Arc::new(SharedReferenceData::new(catalog)), config)
    }
}

impl<S: SessionStore> PlanEngine<S> {
    /// Engine over a caller-supplied session store
    #[must_use]
    pub fn with_store(
        store: S,
        reference: Arc<dyn ReferenceDataProvider>,
        config: PlanningConfig,
    ) -> Self {
        let conversation = IntakeConversation::new(
            store,
            config.conversation.clone(),
            config.defaults.clone(),
        );
        Self {
            conversation,
            reference,
            config,
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlanningConfig {
        &self.config
    }

    /// Session store backing the conversation
    #[must_use]
    pub const fn sessions(&self) -> &S {
        self.conversation.store()
    }

    /// Current reference snapshot
    #[must_use]
    pub fn catalog(&self) -> Arc<ReferenceCatalog> {
        self.reference.snapshot()
    }

    // ------------------------------------------------------------------
    // Normalization
    // ------------------------------------------------------------------

    /// Normalize a whole raw profile, defaulting optional fields
    ///
    /// # Errors
    ///
    /// Returns the first field's `ValidationError`
    pub fn normalize_profile(&self, raw: &RawProfile) -> Result<UserProfile, ValidationError> {
        intake::normalize_profile(raw, &self.config.defaults)
    }

    // ------------------------------------------------------------------
    // Conversation
    // ------------------------------------------------------------------

    /// Process one chat message for a session
    ///
    /// `generated_plan` is set only on the transition into `DONE`.
    #[must_use]
    pub fn advance(&self, session_id: &str, message: &str) -> TurnReply {
        match self.conversation.advance(session_id, message) {
            TurnOutcome::Asked { state } => TurnReply::prompt(state, state.prompt()),
            TurnOutcome::Rejected { state, error } => TurnReply {
                hint: Some(hint_for(&error)),
                ..TurnReply::prompt(state, state.prompt())
            },
            TurnOutcome::Restarted => TurnReply::prompt(
                ConversationState::AskWeight,
                format!("{} {}", prompts::RESTARTED, prompts::ASK_WEIGHT),
            ),
            TurnOutcome::AlreadyDone => {
                TurnReply::prompt(ConversationState::Done, prompts::ALREADY_DONE)
            }
            TurnOutcome::Completed { profile } => self.complete_session(session_id, &profile),
        }
    }

    /// Drop a session; the next message starts at `ASK_WEIGHT`
    pub fn reset_session(&self, session_id: &str) {
        self.conversation.reset(session_id);
    }

    /// State of a session; unknown sessions are at `ASK_WEIGHT`
    #[must_use]
    pub fn session_state(&self, session_id: &str) -> ConversationState {
        self.conversation.state_of(session_id)
    }

    fn complete_session(&self, session_id: &str, profile: &UserProfile) -> TurnReply {
        let catalog = self.reference.snapshot();

        let nutrition = match self.nutrition_on(&catalog, profile) {
            Ok(plan) => Ok(plan),
            // Chat users get the targets with an empty day rather than an error
            Err(PlanError::NoCompatibleRecipes { targets }) => catalog
                .find_goal(profile.goal)
                .map(|goal| GeneratedNutritionPlan {
                    id: Uuid::new_v4(),
                    goal: profile.goal,
                    goal_label: goal.name.clone(),
                    targets,
                    meals: MealPlan::unfilled(),
                    generated_at: Utc::now(),
                }),
            Err(error) => Err(error),
        };
        let training = training_recommender::recommend_for_profile(&catalog, profile)
            .ok()
            .map(|t| GeneratedTrainingPlan::from_template(&t, self.snapshot_of(profile)));

        match &nutrition {
            Ok(plan) => info!(
                session_id,
                calories = plan.calories(),
                recipes = plan.recipes().len(),
                training = training.is_some(),
                "Intake completed"
            ),
            Err(error) => warn!(session_id, %error, "Intake completed without a nutrition plan"),
        }

        TurnReply {
            prompt: self.summarize(&nutrition, training.as_ref()),
            generated_plan: nutrition.ok(),
            training_plan: training,
            ..TurnReply::prompt(ConversationState::Done, String::new())
        }
    }

    fn summarize(
        &self,
        nutrition: &Result<GeneratedNutritionPlan, PlanError>,
        training: Option<&GeneratedTrainingPlan>,
    ) -> String {
        let mut text = String::new();
        match nutrition {
            Ok(plan) => {
                let t = &plan.targets;
                let _ = write!(
                    text,
                    "Your plan is ready. Goal: {}. Daily target: {:.0} kcal \
                     (protein {:.0} g, fat {:.0} g, carbs {:.0} g).",
                    plan.goal_label, t.calories, t.protein_g, t.fat_g, t.carbs_g
                );
                let recipes = plan.recipes();
                let names: Vec<&str> = recipes
                    .iter()
                    .take(self.config.conversation.summary_recipe_count)
                    .map(|r| r.name.as_str())
                    .collect();
                if recipes.is_empty() {
                    let _ = write!(text, " {}", prompts::NO_RECIPES);
                } else if !names.is_empty() {
                    let _ = write!(text, " Example meals: {}.", names.join(", "));
                }
            }
            Err(error) => {
                let _ = write!(
                    text,
                    "Your profile is complete, but no nutrition plan could be built: {error}."
                );
            }
        }
        match training {
            Some(plan) => {
                let _ = write!(
                    text,
                    " Training: {}, {} sessions per week ({} min).",
                    plan.name,
                    plan.sessions.len(),
                    plan.weekly_minutes()
                );
            }
            None => text.push_str(" No training plan matches your goal and equipment."),
        }
        text
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    /// Generate a nutrition plan for a complete profile
    ///
    /// # Errors
    ///
    /// `NoCompatibleRecipes` (with targets) when no recipe passes the dietary
    /// constraints; `Validation` or `MissingReference` for unusable input
    pub fn generate_nutrition_plan(
        &self,
        profile: &UserProfile,
    ) -> Result<GeneratedNutritionPlan, PlanError> {
        self.nutrition_on(&self.reference.snapshot(), profile)
    }

    fn nutrition_on(
        &self,
        catalog: &ReferenceCatalog,
        profile: &UserProfile,
    ) -> Result<GeneratedNutritionPlan, PlanError> {
        generate_nutrition_plan(
            profile,
            catalog,
            &self.config.nutrition,
            &self.config.defaults,
        )
    }

    fn snapshot_of(&self, profile: &UserProfile) -> ProfileSnapshot {
        ProfileSnapshot::capture(profile, self.config.defaults.age_for(profile))
    }

    /// Recommend the training template for `(goal, with_weights)`
    ///
    /// # Errors
    ///
    /// `NotFound` when no template matches exactly
    pub fn recommend_training_plan(
        &self,
        goal: Goal,
        with_weights: bool,
    ) -> Result<TrainingPlanTemplate, PlanError> {
        training_recommender::recommend_training_plan(
            &self.reference.snapshot(),
            goal,
            with_weights,
        )
    }

    /// Recommend by free-text goal name, e.g. `"weight_loss"`
    ///
    /// # Errors
    ///
    /// `UnknownEnumValue` for an unrecognized goal, `NotFound` when no template matches
    pub fn recommend_training_plan_by_name(
        &self,
        goal: &str,
        with_weights: bool,
    ) -> Result<TrainingPlanTemplate, PlanError> {
        training_recommender::recommend_training_plan_by_name(
            &self.reference.snapshot(),
            goal,
            with_weights,
        )
    }

    /// Generate both plans from one snapshot and assemble them
    ///
    /// Never fails as a whole: failed components are listed in `issues`.
    #[must_use]
    pub fn generate_plans(&self, profile: &UserProfile) -> PlanBundle {
        let catalog = self.reference.snapshot();
        let nutrition = self.nutrition_on(&catalog, profile);
        let training = training_recommender::recommend_for_profile(&catalog, profile);
        let bundle = assemble(self.snapshot_of(profile), nutrition, training);
        info!(
            goal = %profile.goal,
            complete = bundle.is_complete(),
            issues = bundle.issues.len(),
            "Assembled plan bundle"
        );
        bundle
    }

    // ------------------------------------------------------------------
    // Reference lookups
    // ------------------------------------------------------------------

    /// Goal row by name or token
    ///
    /// # Errors
    ///
    /// `UnknownEnumValue` for unrecognized names, `MissingReference` for goals without a row
    pub fn find_goal_by_name(&self, name: &str) -> Result<GoalProfile, PlanError> {
        self.reference.snapshot().find_goal_by_name(name).cloned()
    }

    /// Recipes admitted by the constraints, in catalog order
    #[must_use]
    pub fn find_recipes_matching(&self, constraints: &RecipeConstraints) -> Vec<Recipe> {
        self.reference
            .snapshot()
            .find_recipes_matching(constraints)
            .into_iter()
            .cloned()
            .collect()
    }

    /// First template for `(goal, with_weights)`
    #[must_use]
    pub fn find_template_by_goal_and_weights(
        &self,
        goal: Goal,
        with_weights: bool,
    ) -> Option<TrainingPlanTemplate> {
        self.reference
            .snapshot()
            .find_template_by_goal_and_weights(goal, with_weights)
            .cloned()
    }
}
