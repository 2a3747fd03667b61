use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterestArea {
    Environment,
    Education,
    Health,
    Arts,
    Community,
}

impl InterestArea {
    pub const ALL: [Self; 5] = [
        Self::Environment,
        Self::Education,
        Self::Health,
        Self::Arts,
        Self::Community,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Environment => "Medio ambiente",
            Self::Education => "Educación",
            Self::Health => "Salud",
            Self::Arts => "Arte y cultura",
            Self::Community => "Comunidad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    Weekday,
    Weekend,
    Mixed,
}

impl Schedule {
    pub const ALL: [Self; 3] = [Self::Weekday, Self::Weekend, Self::Mixed];

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekday => "Entre semana",
            Self::Weekend => "Fines de semana",
            Self::Mixed => "Horarios mixtos",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Email,
    Phone,
    InApp,
}

impl Channel {
    pub const ALL: [Self; 3] = [Self::Email, Self::Phone, Self::InApp];

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Correo electrónico",
            Self::Phone => "WhatsApp / Teléfono",
            Self::InApp => "Notificaciones dentro de la app",
        }
    }
}

const NO_AREAS: &str = "Sin preferencias";
const UNDEFINED: &str = "Sin definir";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterestSurvey {
    areas: Vec<InterestArea>,
    pub schedule: Option<Schedule>,
    pub channel: Option<Channel>,
}

impl InterestSurvey {
    pub fn is_selected(&self, area: InterestArea) -> bool {
        self.areas.contains(&area)
    }

    pub fn toggle_area(&mut self, area: InterestArea) {
        if let Some(position) = self.areas.iter().position(|picked| *picked == area) {
            self.areas.remove(position);
        } else {
            self.areas.push(area);
        }
    }

    pub fn choose_schedule(&mut self, schedule: Schedule) {
        self.schedule = Some(schedule);
    }

    pub fn choose_channel(&mut self, channel: Channel) {
        self.channel = Some(channel);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn areas_summary(&self) -> String {
        if self.areas.is_empty() {
            return NO_AREAS.to_owned();
        }

        self.areas
            .iter()
            .map(|area| area.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn schedule_summary(&self) -> &'static str {
        self.schedule.map(Schedule::label).unwrap_or(UNDEFINED)
    }

    pub fn channel_summary(&self) -> &'static str {
        self.channel.map(Channel::label).unwrap_or(UNDEFINED)
    }
}

#[derive(Debug, Default)]
pub struct SurveyDialog {
    open: bool,
    pub survey: InterestSurvey,
}

impl SurveyDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self, reset: bool) {
        if reset {
            debug!(
                areas = %self.survey.areas_summary(),
                schedule = self.survey.schedule_summary(),
                channel = self.survey.channel_summary(),
                "interest survey completed"
            );
            self.survey.reset();
        }
        self.open = false;
    }

    pub fn clear(&mut self) {
        self.survey.reset();
    }
}
