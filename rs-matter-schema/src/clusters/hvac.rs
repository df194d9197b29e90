/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! HVAC clusters.

clusters! {
    PumpConfigurationAndControl = 0x0200 {
        attributes {
            0x0000 => MaxPressure,
            0x0001 => MaxSpeed,
            0x0002 => MaxFlow,
            0x0003 => MinConstPressure,
            0x0004 => MaxConstPressure,
            0x0005 => MinCompPressure,
            0x0006 => MaxCompPressure,
            0x0007 => MinConstSpeed,
            0x0008 => MaxConstSpeed,
            0x0009 => MinConstFlow,
            0x000A => MaxConstFlow,
            0x000B => MinConstTemp,
            0x000C => MaxConstTemp,
            0x0010 => PumpStatus,
            0x0011 => EffectiveOperationMode,
            0x0012 => EffectiveControlMode,
            0x0013 => Capacity,
            0x0014 => Speed,
            0x0015 => LifetimeRunningHours,
            0x0016 => Power,
            0x0017 => LifetimeEnergyConsumed,
            0x0020 => OperationMode,
            0x0021 => ControlMode,
        }
        events {
            0x00 => SupplyVoltageLow,
            0x01 => SupplyVoltageHigh,
            0x02 => PowerMissingPhase,
            0x03 => SystemPressureLow,
            0x04 => SystemPressureHigh,
            0x05 => DryRunning,
            0x06 => MotorTemperatureHigh,
            0x07 => PumpMotorFatalFailure,
            0x08 => ElectronicTemperatureHigh,
            0x09 => PumpBlocked,
            0x0A => SensorFailure,
            0x0B => ElectronicNonFatalFailure,
            0x0C => ElectronicFatalFailure,
            0x0D => GeneralFault,
            0x0E => Leakage,
            0x0F => AirDetection,
            0x10 => TurbineOperation,
        }
        commands {}
    }

    Thermostat = 0x0201 {
        attributes {
            0x0000 => LocalTemperature,
            0x0001 => OutdoorTemperature,
            0x0002 => Occupancy,
            0x0003 => AbsMinHeatSetpointLimit,
            0x0004 => AbsMaxHeatSetpointLimit,
            0x0005 => AbsMinCoolSetpointLimit,
            0x0006 => AbsMaxCoolSetpointLimit,
            0x0007 => PICoolingDemand,
            0x0008 => PIHeatingDemand,
            0x0009 => HVACSystemTypeConfiguration,
            0x0010 => LocalTemperatureCalibration,
            0x0011 => OccupiedCoolingSetpoint,
            0x0012 => OccupiedHeatingSetpoint,
            0x0013 => UnoccupiedCoolingSetpoint,
            0x0014 => UnoccupiedHeatingSetpoint,
            0x0015 => MinHeatSetpointLimit,
            0x0016 => MaxHeatSetpointLimit,
            0x0017 => MinCoolSetpointLimit,
            0x0018 => MaxCoolSetpointLimit,
            0x0019 => MinSetpointDeadBand,
            0x001A => RemoteSensing,
            0x001B => ControlSequenceOfOperation,
            0x001C => SystemMode,
            0x001E => ThermostatRunningMode,
            0x0020 => StartOfWeek,
            0x0021 => NumberOfWeeklyTransitions,
            0x0022 => NumberOfDailyTransitions,
            0x0023 => TemperatureSetpointHold,
            0x0024 => TemperatureSetpointHoldDuration,
            0x0025 => ThermostatProgrammingOperationMode,
            0x0029 => ThermostatRunningState,
            0x0030 => SetpointChangeSource,
            0x0031 => SetpointChangeAmount,
            0x0032 => SetpointChangeSourceTimestamp,
            0x0034 => OccupiedSetback,
            0x0035 => OccupiedSetbackMin,
            0x0036 => OccupiedSetbackMax,
            0x0037 => UnoccupiedSetback,
            0x0038 => UnoccupiedSetbackMin,
            0x0039 => UnoccupiedSetbackMax,
            0x003A => EmergencyHeatDelta,
            0x0040 => ACType,
            0x0041 => ACCapacity,
            0x0042 => ACRefrigerantType,
            0x0043 => ACCompressorType,
            0x0044 => ACErrorCode,
            0x0045 => ACLouverPosition,
            0x0046 => ACCoilTemperature,
            0x0047 => ACCapacityformat,
        }
        events {}
        commands {
            0x00 => SetpointRaiseLower,
            0x01 => SetWeeklySchedule,
            0x02 => GetWeeklySchedule,
            0x03 => ClearWeeklySchedule,
        }
    }

    FanControl = 0x0202 {
        attributes {
            0x0000 => FanMode,
            0x0001 => FanModeSequence,
            0x0002 => PercentSetting,
            0x0003 => PercentCurrent,
            0x0004 => SpeedMax,
            0x0005 => SpeedSetting,
            0x0006 => SpeedCurrent,
            0x0007 => RockSupport,
            0x0008 => RockSetting,
            0x0009 => WindSupport,
            0x000A => WindSetting,
            0x000B => AirflowDirection,
        }
        events {}
        commands {
            0x00 => Step,
        }
    }

    ThermostatUserInterfaceConfiguration = 0x0204 {
        attributes {
            0x0000 => TemperatureDisplayMode,
            0x0001 => KeypadLockout,
            0x0002 => ScheduleProgrammingVisibility,
        }
        events {}
        commands {}
    }
}
