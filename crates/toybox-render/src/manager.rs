// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The graphics manager: API selection, displays, open stages, and the
//! per-tick render loop.

use std::collections::HashMap;

use parking_lot::Mutex;

use toybox_core::event::{EngineEvent, EventBus, SharedEventBus, SubscriberToken};
use toybox_core::graphics::{
    GraphicsBackend, GraphicsContextProvider, GraphicsSettings, RenderError, RenderingApi,
};
use toybox_core::stage::SharedStage;
use toybox_core::window::SharedSurface;
use toybox_core::Shared;

use crate::cache::ResourceCache;
use crate::display::Display;
use crate::pipeline::GraphicsPipeline;

/// One usable rendering stack: a backend, the provider that creates its
/// contexts, and the resource cache those contexts share.
pub struct Renderer {
    backend: Shared<dyn GraphicsBackend>,
    context_provider: Shared<dyn GraphicsContextProvider>,
    cache: ResourceCache,
}

impl Renderer {
    /// The renderer's backend.
    pub fn backend(&self) -> &Shared<dyn GraphicsBackend> {
        &self.backend
    }

    /// The renderer's context provider.
    pub fn context_provider(&self) -> &Shared<dyn GraphicsContextProvider> {
        &self.context_provider
    }

    /// The renderer's resource cache.
    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }
}

/// Owns the render side of the engine: which API is active, the open
/// displays and stages, and the pipeline that draws them every tick.
pub struct GraphicsManager {
    renderers: HashMap<RenderingApi, Renderer>,
    pipeline: GraphicsPipeline,
    displays: Vec<Display>,
    stages: Vec<SharedStage>,
    settings: GraphicsSettings,
    bus: SharedEventBus,
}

impl GraphicsManager {
    /// Builds the manager by pairing backends with same-API context
    /// providers.
    ///
    /// Backends without a matching provider (and providers without a
    /// backend) are dropped with a warning.
    ///
    /// ## Returns
    /// `Configuration` when not a single usable pair remains.
    pub fn new(
        bus: SharedEventBus,
        backends: Vec<Shared<dyn GraphicsBackend>>,
        providers: Vec<Shared<dyn GraphicsContextProvider>>,
        pipeline: GraphicsPipeline,
    ) -> Result<Self, RenderError> {
        let mut renderers = HashMap::new();

        for backend in backends {
            let api = backend.api();
            if renderers.contains_key(&api) {
                log::warn!("Duplicate backend for {api:?}; keeping the first.");
                continue;
            }
            match providers.iter().find(|provider| provider.api() == api) {
                Some(provider) => {
                    log::info!("Renderer configured for {api:?}.");
                    renderers.insert(
                        api,
                        Renderer {
                            backend,
                            context_provider: provider.clone(),
                            cache: ResourceCache::new(),
                        },
                    );
                }
                None => {
                    log::warn!("No context provider for {api:?}; dropping its backend.");
                }
            }
        }
        for provider in &providers {
            if !renderers.contains_key(&provider.api()) {
                log::warn!(
                    "No backend for {:?}; dropping its context provider.",
                    provider.api()
                );
            }
        }

        if renderers.is_empty() {
            return Err(RenderError::Configuration(
                "no matching backend/context-provider pair".to_string(),
            ));
        }

        Ok(Self {
            renderers,
            pipeline,
            displays: Vec::new(),
            stages: Vec::new(),
            settings: GraphicsSettings::default(),
            bus,
        })
    }

    /// Subscribes a shared manager to a bus, forwarding every event to
    /// [`GraphicsManager::handle_event`].
    pub fn connect(manager: Shared<Mutex<GraphicsManager>>, bus: &EventBus) -> SubscriberToken {
        bus.subscribe(move |envelope| {
            manager.lock().handle_event(envelope.event());
        })
    }

    /// Reacts to one engine event.
    pub fn handle_event(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::WindowOpened(surface) => self.open_window(surface.clone()),
            EngineEvent::WindowClosed(surface) => self.close_window(surface),
            EngineEvent::StageOpened(stage) => self.open_stage(stage.clone()),
            EngineEvent::StageClosed(stage) => self.close_stage(stage),
            EngineEvent::AppSettingsChanged(settings) => self.apply_settings(*settings),
            EngineEvent::FrameRendered => {}
        }
    }

    /// Runs one tick: recover missing contexts, draw every display,
    /// publish `FrameRendered`.
    ///
    /// When the active API has no configured renderer the tick is a
    /// no-op.
    pub fn update(&mut self) {
        let api = self.settings.rendering_api;
        if !self.renderers.contains_key(&api) {
            log::debug!("No renderer for active API {api:?}; skipping tick.");
            return;
        }

        self.provide_missing_contexts();

        let Some(renderer) = self.renderers.get_mut(&api) else {
            return;
        };
        let backend = renderer.backend.clone();

        let mut lost_contexts = Vec::new();
        for (index, display) in self.displays.iter().enumerate() {
            match self.pipeline.draw(
                backend.as_ref(),
                &mut renderer.cache,
                display,
                &self.stages,
                self.settings.clear_color,
            ) {
                Ok(()) => {}
                Err(RenderError::ContextLost) => {
                    log::warn!(
                        "Context lost on display {}; recreating next tick.",
                        display.id()
                    );
                    lost_contexts.push(index);
                }
                Err(err) => {
                    log::error!("Draw failed on display {}: {err}", display.id());
                }
            }
        }
        for index in lost_contexts {
            self.displays[index].clear_context();
        }

        // Queued rather than sent synchronously: a subscriber may hold
        // this manager's lock through the bus.
        self.bus.post(EngineEvent::FrameRendered);
    }

    /// The stages currently included in frames.
    pub fn open_stages(&self) -> &[SharedStage] {
        &self.stages
    }

    /// The displays currently drawn each tick.
    pub fn displays(&self) -> &[Display] {
        &self.displays
    }

    /// The renderer configured for `api`, if any.
    pub fn renderer(&self, api: RenderingApi) -> Option<&Renderer> {
        self.renderers.get(&api)
    }

    /// The current settings.
    pub fn settings(&self) -> &GraphicsSettings {
        &self.settings
    }

    fn open_window(&mut self, surface: SharedSurface) {
        log::info!("Window {} opened.", surface.id());
        let mut display = Display::new(surface);
        if let Some(renderer) = self.renderers.get(&self.settings.rendering_api) {
            let context = renderer.context_provider.provide(display.surface());
            context.set_vsync(self.settings.vsync);
            display.set_context(context);
        }
        self.displays.push(display);
    }

    fn close_window(&mut self, surface: &SharedSurface) {
        let id = surface.id();
        let before = self.displays.len();
        self.displays.retain(|display| display.id() != id);
        if self.displays.len() == before {
            log::warn!("WindowClosed for unknown surface {id}.");
        } else {
            log::info!("Window {id} closed.");
        }
    }

    fn open_stage(&mut self, stage: SharedStage) {
        if self.stages.iter().any(|open| Shared::ptr_eq(open, &stage)) {
            log::debug!("Stage {} already open.", stage.id());
            return;
        }
        log::info!("Stage {} opened.", stage.id());
        self.stages.push(stage);
    }

    fn close_stage(&mut self, stage: &SharedStage) {
        let before = self.stages.len();
        self.stages.retain(|open| !Shared::ptr_eq(open, stage));
        if self.stages.len() == before {
            log::debug!("StageClosed for stage {} that was not open.", stage.id());
        } else {
            log::info!("Stage {} closed.", stage.id());
        }
    }

    fn apply_settings(&mut self, settings: GraphicsSettings) {
        let api_changed = settings.rendering_api != self.settings.rendering_api;
        self.settings = settings;

        if api_changed {
            log::info!("Rendering API switched to {:?}.", settings.rendering_api);
            // GPU handles cannot migrate between APIs; drop everything
            // and let contexts be re-provided for the new API.
            for renderer in self.renderers.values_mut() {
                renderer.cache.clear();
            }
            for display in &mut self.displays {
                display.clear_context();
            }
            self.provide_missing_contexts();
        } else {
            for display in &self.displays {
                if let Some(context) = display.context() {
                    context.set_vsync(settings.vsync);
                }
            }
        }
    }

    /// Gives every context-less display a fresh context for the active
    /// API, applying the current vsync mode.
    fn provide_missing_contexts(&mut self) {
        let Some(renderer) = self.renderers.get(&self.settings.rendering_api) else {
            return;
        };
        for display in &mut self.displays {
            if display.context().is_none() {
                let context = renderer.context_provider.provide(display.surface());
                context.set_vsync(self.settings.vsync);
                display.set_context(context);
            }
        }
    }
}

impl std::fmt::Debug for GraphicsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphicsManager")
            .field("apis", &self.renderers.keys().collect::<Vec<_>>())
            .field("displays", &self.displays.len())
            .field("stages", &self.stages.len())
            .field("settings", &self.settings)
            .finish()
    }
}
