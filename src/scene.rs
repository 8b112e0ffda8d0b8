//! Explicit scene context: everything the frame loop reads and writes lives here
//! instead of in shared globals.

use std::f64::consts::TAU;

use log::{debug, info, warn};

use crate::camera::{screen_to_ndc, GlobeCamera};
use crate::commands::{CommandQueue, SceneCommand};
use crate::config::GlobeConfig;
use crate::dataset::{Country, CountryCatalog};
use crate::error::GeoResult;
use crate::frame::FrameInfo;
use crate::framer::{CameraFramer, Navigator};
use crate::geo::GeoCoordinate;
use crate::math::Point3D;
use crate::picking::{pick, PickHit};
use crate::tracker::{DecorationKind, SurfaceDecoration, SurfaceTracker};
use crate::types::{CameraUniform, DecorationInstance};

/// Auto-rotation of the earth and cloud layers about +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeSpin {
    pub earth: f64,
    pub clouds: f64,
    pub earth_rate: f64,
    pub cloud_rate: f64,
}

impl GlobeSpin {
    pub fn new(earth_rate: f64, cloud_rate: f64) -> Self {
        Self {
            earth: 0.0,
            clouds: 0.0,
            earth_rate,
            cloud_rate,
        }
    }

    /// Advances both layers by `delta` seconds. Angles stay in [0, 2π).
    pub fn advance(&mut self, delta: f64) {
        self.earth = (self.earth + self.earth_rate * delta).rem_euclid(TAU);
        self.clouds = (self.clouds + self.cloud_rate * delta).rem_euclid(TAU);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    CountrySelected {
        index: usize,
        name: String,
        details: String,
    },
    NavigationStarted { target: GeoCoordinate },
    NavigationFinished,
    SearchMissed(String),
    PickMissed,
    UserMarkerPlaced(GeoCoordinate),
    /// A command that could not be applied; the message is meant for display.
    CommandRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub number: u64,
    pub camera: Point3D,
    pub rotation: f64,
    pub moving: bool,
    pub events: Vec<SceneEvent>,
}

pub struct GlobeScene {
    config: GlobeConfig,
    spin: GlobeSpin,
    spin_enabled: bool,
    camera: GlobeCamera,
    navigator: Navigator,
    decorations: Vec<SurfaceDecoration>,
    catalog: CountryCatalog,
    selected: Option<usize>,
    user_marker: Option<usize>,
    commands: CommandQueue,
    now_ms: u64,
}

impl GlobeScene {
    pub fn new(config: GlobeConfig, catalog: CountryCatalog) -> GeoResult<Self> {
        config.validate()?;
        let framer = CameraFramer::new(config.globe_radius)?;
        let decorations = catalog.flag_decorations(
            config.decoration_radius,
            config.flag_width,
            config.flag_height,
        )?;

        let mut camera = GlobeCamera::new(
            config.fov_degrees.to_radians(),
            config.min_distance,
            config.max_distance,
        );
        camera.set_position(Point3D::new(0.0, 0.0, config.camera_distance));

        info!("Scene created: {} flags", decorations.len());

        Ok(Self {
            spin: GlobeSpin::new(config.earth_spin, config.cloud_spin),
            spin_enabled: true,
            camera,
            navigator: Navigator::new(framer),
            decorations,
            catalog,
            selected: None,
            user_marker: None,
            commands: CommandQueue::new(),
            now_ms: 0,
            config,
        })
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn camera(&self) -> &GlobeCamera {
        &self.camera
    }

    pub fn spin(&self) -> &GlobeSpin {
        &self.spin
    }

    pub fn set_spin_enabled(&mut self, enabled: bool) {
        self.spin_enabled = enabled;
    }

    pub fn decorations(&self) -> &[SurfaceDecoration] {
        &self.decorations
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn selected_country(&self) -> Option<&Country> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    pub fn is_navigating(&self) -> bool {
        self.navigator.is_moving()
    }

    pub fn push(&mut self, command: SceneCommand) {
        self.commands.push(command);
    }

    /// One frame: spin, apply queued commands, advance the camera transition and
    /// re-anchor every decoration.
    pub fn tick(&mut self, frame: FrameInfo) -> FrameReport {
        self.now_ms = frame.now_ms;
        if self.spin_enabled {
            self.spin.advance(frame.delta);
        }

        let mut events = Vec::new();
        let commands: Vec<SceneCommand> = self.commands.drain().collect();
        for command in commands {
            self.apply(command, &mut events);
        }

        if let Some(sample) = self.navigator.step(self.now_ms) {
            self.camera.set_position(sample.position);
            if sample.done {
                events.push(SceneEvent::NavigationFinished);
            }
        }

        SurfaceTracker::update(&mut self.decorations, self.spin.earth);

        FrameReport {
            number: frame.number,
            camera: self.camera.position(),
            rotation: self.spin.earth,
            moving: self.navigator.is_moving(),
            events,
        }
    }

    fn apply(&mut self, command: SceneCommand, events: &mut Vec<SceneEvent>) {
        debug!("Applying {:?}", command);
        match command {
            SceneCommand::Focus(coord) => self.focus(coord, events),
            SceneCommand::Search(query) => {
                let found = self.catalog.search(&query).map(|(index, _)| index);
                match found {
                    Some(index) => self.select(index, events),
                    None => events.push(SceneEvent::SearchMissed(query)),
                }
            }
            SceneCommand::Select(index) => self.select(index, events),
            SceneCommand::Pick {
                x,
                y,
                width,
                height,
            } => self.pick(x, y, width, height, events),
            SceneCommand::Drag { dx, dy } => self.camera.drag(dx, dy),
            SceneCommand::Zoom(factor) => self.camera.zoom(factor),
            SceneCommand::UserLocated(fix) => self.place_user_marker(fix.coordinate, events),
        }
    }

    fn focus(&mut self, coord: GeoCoordinate, events: &mut Vec<SceneEvent>) {
        let result = self.navigator.navigate(
            self.camera.position(),
            coord,
            self.config.focus_distance,
            self.spin.earth,
            self.config.transition_ms,
            self.now_ms,
        );
        match result {
            Ok(_) => events.push(SceneEvent::NavigationStarted { target: coord }),
            Err(e) => {
                warn!("Focus on {} rejected: {}", coord, e);
                events.push(SceneEvent::CommandRejected(e.to_string()));
            }
        }
    }

    fn select(&mut self, index: usize, events: &mut Vec<SceneEvent>) {
        let Some(country) = self.catalog.get(index) else {
            events.push(SceneEvent::CommandRejected(format!(
                "no country at index {}",
                index
            )));
            return;
        };

        let coordinate = country.coordinate;
        events.push(SceneEvent::CountrySelected {
            index,
            name: country.name.clone(),
            details: country.details(),
        });
        self.selected = Some(index);
        self.focus(coordinate, events);
    }

    fn pick(&mut self, x: f64, y: f64, width: f64, height: f64, events: &mut Vec<SceneEvent>) {
        if !(width > 0.0 && height > 0.0) {
            events.push(SceneEvent::CommandRejected(format!(
                "invalid viewport {}x{}",
                width, height
            )));
            return;
        }

        let (ndc_x, ndc_y) = screen_to_ndc(x, y, width, height);
        let ray = self.camera.pick_ray(ndc_x, ndc_y);

        match pick(&ray, &self.decorations, self.config.globe_radius, self.spin.earth) {
            Some(PickHit::Decoration { index, .. }) => {
                let decoration = &self.decorations[index];
                match (decoration.source, decoration.coordinate()) {
                    (Some(country), _) => self.select(country, events),
                    (None, coordinate) => self.focus(coordinate, events),
                }
            }
            Some(PickHit::Globe { coordinate, .. }) => self.focus(coordinate, events),
            None => events.push(SceneEvent::PickMissed),
        }
    }

    fn place_user_marker(&mut self, coord: GeoCoordinate, events: &mut Vec<SceneEvent>) {
        let marker = match SurfaceDecoration::new(
            coord,
            self.config.decoration_radius,
            DecorationKind::Marker {
                size: self.config.marker_size,
            },
        ) {
            Ok(m) => m,
            Err(e) => {
                events.push(SceneEvent::CommandRejected(e.to_string()));
                return;
            }
        };

        match self.user_marker {
            Some(i) => self.decorations[i] = marker,
            None => {
                self.decorations.push(marker);
                self.user_marker = Some(self.decorations.len() - 1);
            }
        }
        events.push(SceneEvent::UserMarkerPlaced(coord));
    }

    pub fn instances(&self) -> Vec<DecorationInstance> {
        self.decorations.iter().map(SurfaceDecoration::to_instance).collect()
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.camera
            .to_uniform(self.now_ms as f32 / 1000.0, self.spin.earth as f32)
    }
}
