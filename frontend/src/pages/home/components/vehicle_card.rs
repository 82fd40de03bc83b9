use super::PHONE_HREF;
use crate::{
    api::Vehicle,
    utils::format::{format_brl, format_mileage},
};
use leptos::*;

#[component]
pub fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let image = vehicle.cover_image().to_string();
    let price = (vehicle.price > 0.0).then(|| format_brl(vehicle.price));
    let seats = vehicle
        .seats
        .filter(|seats| *seats > 0)
        .map(|seats| format!("{} lugares", seats));

    view! {
        <article class="rounded-lg overflow-hidden border border-border bg-surface-elevated shadow-sm hover:shadow-lg">
            <div class="relative h-48 bg-surface-muted">
                <img src=image alt=vehicle.title.clone() class="w-full h-full object-cover" loading="lazy" />
                {vehicle.featured.then(|| view! {
                    <span class="absolute top-3 left-3 px-2 py-1 rounded text-xs font-bold bg-action-primary-bg text-action-primary-text">
                        "DESTAQUE DO MÊS"
                    </span>
                })}
                <span class="absolute top-3 right-3 px-2 py-1 rounded text-xs font-semibold bg-surface-elevated text-fg">
                    {vehicle.vehicle_type.label()}
                </span>
            </div>
            <div class="p-5 space-y-3">
                <h3 class="text-lg font-semibold text-fg">{vehicle.title.clone()}</h3>
                <p class="text-sm text-fg-muted">
                    {format!("{} {}", vehicle.manufacturer, vehicle.model)}
                </p>
                <ul class="grid grid-cols-2 gap-2 text-sm text-fg-muted">
                    <li>{vehicle.year}</li>
                    <li>{format_mileage(vehicle.mileage)}</li>
                    <li>{vehicle.location.clone()}</li>
                    {seats.map(|seats| view! { <li>{seats}</li> })}
                </ul>
                {price.map(|price| view! {
                    <p class="text-2xl font-bold text-action-primary-bg">{price}</p>
                })}
                <div class="flex gap-2">
                    <a href="#contact" class="flex-1 text-center px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover">
                        "Ver Detalhes"
                    </a>
                    <a href=PHONE_HREF aria-label="Ligar" class="px-4 py-2 rounded-md text-sm border border-border text-fg">
                        "☎"
                    </a>
                </div>
            </div>
        </article>
    }
}
