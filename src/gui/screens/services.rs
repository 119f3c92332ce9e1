use iced::{
    Alignment::Center,
    Border, Element, Length, Task, Theme,
    widget::{Column, Row, button, column, container, pick_list, row, text},
};
use time::Date;

use crate::{
    core::{
        Catalog, CalendarCell, CalendarState, SlotSelector,
        calendar::{WEEKDAY_HEADERS, format_long_date},
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, label, page},
    },
};

const CELL_WIDTH: f32 = 48.0;
const SLOTS_PER_ROW: usize = 6;

/// Appointment booking: service and doctor pickers, month calendar and time slots.
#[derive(Debug, Clone)]
pub struct ServicesScreen {
    pub service: Option<String>,
    pub doctor: Option<String>,
    pub calendar: CalendarState,
    pub slots: SlotSelector,
}

#[derive(Debug, Clone)]
pub enum ServicesMessage {
    ServiceSelected(String),
    DoctorSelected(String),
    PrevMonth,
    NextMonth,
    DaySelected(Option<Date>),
    SlotSelected(String),
    ConfirmBooking,
}

impl ServicesScreen {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            service: catalog.services.first().cloned(),
            doctor: catalog.booking_doctors.first().cloned(),
            calendar: CalendarState::default(),
            slots: catalog.slot_selector(),
        }
    }

    pub fn times_heading(&self) -> String {
        match self.calendar.selected_date() {
            Some(date) => format!("Available Times on {}", format_long_date(date)),
            None => "Select a date".to_string(),
        }
    }

    fn calendar_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            button(text("‹"))
                .style(button::text)
                .on_press(on(ServicesMessage::PrevMonth)),
            container(text(self.calendar.title()).size(20)).center_x(Length::Fill),
            button(text("›"))
                .style(button::text)
                .on_press(on(ServicesMessage::NextMonth)),
        ]
        .align_y(Center);

        let weekdays: Vec<Element<'_, ScreenMessage<Self>>> = WEEKDAY_HEADERS
            .iter()
            .map(|day| {
                container(text(*day).size(12))
                    .center_x(Length::Fixed(CELL_WIDTH))
                    .into()
            })
            .collect();

        let grid = self.calendar.month_grid();
        let weeks: Vec<Element<'_, ScreenMessage<Self>>> = grid
            .weeks()
            .map(|week| {
                let cells: Vec<Element<'_, ScreenMessage<Self>>> =
                    week.iter().map(day_cell).collect();
                Row::with_children(cells).spacing(4).into()
            })
            .collect();

        card(
            column![
                header,
                Row::with_children(weekdays).spacing(4),
                Column::with_children(weeks).spacing(4),
            ]
            .spacing(10),
        )
        .max_width(7.0 * (CELL_WIDTH + 4.0) + 40.0)
        .into()
    }

    fn slots_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let rows: Vec<Element<'_, ScreenMessage<Self>>> = self
            .slots
            .slots()
            .chunks(SLOTS_PER_ROW)
            .map(|chunk| {
                let buttons: Vec<Element<'_, ScreenMessage<Self>>> = chunk
                    .iter()
                    .map(|slot| {
                        let active = self.slots.is_selected(&slot.label);
                        button(text(&slot.label))
                            .width(Length::Fixed(96.0))
                            .style(move |theme, status| {
                                if active {
                                    button::primary(theme, status)
                                } else {
                                    button::secondary(theme, status)
                                }
                            })
                            .on_press_maybe((!slot.is_disabled).then(|| {
                                on(ServicesMessage::SlotSelected(slot.label.clone()))
                            }))
                            .into()
                    })
                    .collect();
                Row::with_children(buttons).spacing(8).into()
            })
            .collect();

        column![
            text(self.times_heading()).size(20),
            Column::with_children(rows).spacing(8),
            button("Confirm Booking")
                .style(button::primary)
                .on_press(on(ServicesMessage::ConfirmBooking)),
        ]
        .spacing(12)
        .into()
    }
}

fn on(message: ServicesMessage) -> ScreenMessage<ServicesScreen> {
    ScreenMessage::ScreenMessage(message)
}

/// Selected days are filled; the promotional day keeps a success-colored ring
/// even while selected.
pub fn day_style(
    selected: bool,
    highlighted: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| match (selected, highlighted) {
        (true, true) => button::Style {
            border: Border {
                color: theme.palette().success,
                width: 3.0,
                radius: 4.0.into(),
            },
            ..button::primary(theme, status)
        },
        (true, false) => button::primary(theme, status),
        (false, true) => button::success(theme, status),
        (false, false) => button::text(theme, status),
    }
}

fn day_cell<'a>(cell: &CalendarCell) -> Element<'a, ScreenMessage<ServicesScreen>> {
    button(container(text(cell.label())).center_x(Length::Fill))
        .width(Length::Fixed(CELL_WIDTH))
        .style(day_style(cell.is_selected, cell.is_highlighted))
        .on_press_maybe(cell.date.map(|date| on(ServicesMessage::DaySelected(Some(date)))))
        .into()
}

impl Screen for ServicesScreen {
    type Message = ServicesMessage;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let pickers = row![
            column![
                label("Service"),
                pick_list(
                    state.catalog.services.as_slice(),
                    self.service.as_ref(),
                    |value| on(ServicesMessage::ServiceSelected(value)),
                ),
            ]
            .spacing(4),
            column![
                label("Doctor"),
                pick_list(
                    state.catalog.booking_doctors.as_slice(),
                    self.doctor.as_ref(),
                    |value| on(ServicesMessage::DoctorSelected(value)),
                ),
            ]
            .spacing(4),
        ]
        .spacing(20);

        page(
            "Book an Appointment",
            column![pickers, self.calendar_view(), self.slots_view()].spacing(24),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ServicesMessage::ServiceSelected(service) => self.service = Some(service),
            ServicesMessage::DoctorSelected(doctor) => self.doctor = Some(doctor),
            ServicesMessage::PrevMonth => {
                self.calendar.prev_month();
            }
            ServicesMessage::NextMonth => {
                self.calendar.next_month();
            }
            ServicesMessage::DaySelected(date) => {
                self.calendar.select_date(date);
            }
            ServicesMessage::SlotSelected(label) => {
                self.slots.select(&label);
            }
            ServicesMessage::ConfirmBooking => {
                log::info!("booking is not connected to a backend; nothing submitted");
            }
        }
        Task::none()
    }
}
